use crate::config::Config;
use crate::events::storage as storage_events;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::input::LogHaptics;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use crate::store::{FileStorage, MemoryStorage, Storage};
use crate::ui::{self, LayoutGeometry, Theme, ViewState};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Startup switches given on the command line.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Force touch input regardless of configuration.
    pub touch: bool,
    /// Keep the navigation order in memory only.
    pub ephemeral: bool,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    watched: Option<FileStorage>,
    logs: LogBuffer,
    theme: Theme,
    view: ViewState,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, options: Options) -> Result<()> {
        let logs = LogBuffer::new();
        CustomLogger::init(logs.clone(), LevelFilter::Debug)?;

        info!("Starting application...");
        let (storage, watched): (Box<dyn Storage>, _) = if options.ephemeral {
            info!("Ephemeral session, navigation order will not be saved");
            (Box::new(MemoryStorage::new()), None)
        } else {
            let dir = config.resolved_data_dir()?;
            debug!("Persisting navigation order under {}", dir.display());
            let storage = FileStorage::new(dir);
            (Box::new(storage.clone()), Some(storage))
        };
        let touch_capable = options.touch || config.touch.unwrap_or(false);

        let mut app = App {
            state: State::new(&config, storage, touch_capable, Box::new(LogHaptics)),
            watched,
            logs,
            theme: Theme::default(),
            view: ViewState::default(),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        // Polling still picks up changes if the watcher cannot start.
        let _watcher = match &self.watched {
            Some(storage) => match storage_events::watch(storage, terminal_event_handler.sender()) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    warn!("Failed to watch storage directory: {}", e);
                    None
                }
            },
            None => None,
        };
        loop {
            let area = terminal.size()?;
            let geometry = LayoutGeometry::new(
                area,
                self.state.current_page(),
                self.state.order().pages().len(),
            );
            terminal.draw(|frame| {
                ui::render(frame, &self.state, &geometry, &self.view, &self.logs, &self.theme)
            })?;
            if !terminal_event_handler.handle_next(&mut self.state, &geometry, &mut self.view)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
