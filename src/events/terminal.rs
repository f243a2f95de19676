use crate::input::{desktop::WHEEL_STEP_DELTA, Command, FocusTarget, InputMode, WheelEvent};
use crate::error::AppError;
use crate::state::State;
use crate::ui::{LayoutGeometry, ViewState};
use anyhow::Result;
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Rows moved by one body scroll step.
///
const SCROLL_STEP: i32 = 1;
const PAGE_STEP: i32 = 10;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Input(KeyEvent),
    Mouse(MouseEvent),
    /// A storage key changed on disk.
    Storage(String),
    /// The input thread stopped after a read error.
    Failed(String),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match poll_next(tick_rate) {
                Ok(Some(event)) => {
                    if tx_clone.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Failed to read terminal event: {}", e);
                    let _ = tx_clone.send(Event::Failed(e.to_string()));
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, tx }
    }

    /// Sender for other event sources sharing this channel.
    ///
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(
        &self,
        state: &mut State,
        geometry: &LayoutGeometry,
        view: &mut ViewState,
    ) -> Result<bool> {
        match self.rx.recv()? {
            Event::Failed(message) => Err(AppError::Terminal(message).into()),
            event => Ok(dispatch(event, state, geometry, view, Instant::now())),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

fn poll_next(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Input(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        _ => None,
    })
}

/// Route one event to the core. Returns false if exit was requested.
///
pub fn dispatch(
    event: Event,
    state: &mut State,
    geometry: &LayoutGeometry,
    view: &mut ViewState,
    now: Instant,
) -> bool {
    let keep_running = match event {
        Event::Input(key) => key_event(key, state, view, now),
        Event::Mouse(mouse) => {
            match state.input_mode() {
                InputMode::Desktop => desktop_mouse(mouse, state, geometry, view),
                InputMode::Touch => touch_mouse(mouse, state, geometry, now),
            }
            true
        }
        Event::Storage(key) => {
            state.on_storage_event(&key);
            true
        }
        Event::Failed(message) => {
            error!("Stopping after input failure: {}", message);
            false
        }
        Event::Tick => {
            state.tick(now);
            true
        }
    };
    if state.take_scroll_reset() {
        view.reset_scroll();
    }
    keep_running
}

fn key_event(key: KeyEvent, state: &mut State, view: &mut ViewState, now: Instant) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::Char('q'), KeyModifiers::NONE)
            if !state.desktop().chord_armed() && !state.caption_editor_open() =>
        {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::Up, KeyModifiers::NONE) => view.scroll_by(-SCROLL_STEP),
        (KeyCode::Down, KeyModifiers::NONE) => view.scroll_by(SCROLL_STEP),
        (KeyCode::PageUp, _) => view.scroll_by(-PAGE_STEP),
        (KeyCode::PageDown, _) => view.scroll_by(PAGE_STEP),
        _ => state.key(&key, FocusTarget::None, now),
    }
    true
}

/// Desktop mode: horizontal scroll is a trackpad swipe and a click on the
/// bottom bar selects the item.
///
fn desktop_mouse(
    mouse: MouseEvent,
    state: &mut State,
    geometry: &LayoutGeometry,
    view: &mut ViewState,
) {
    let delta = match mouse.kind {
        MouseEventKind::ScrollRight => Some(WHEEL_STEP_DELTA * 2.0),
        MouseEventKind::ScrollLeft => Some(-WHEEL_STEP_DELTA * 2.0),
        MouseEventKind::ScrollDown => {
            view.scroll_by(SCROLL_STEP);
            None
        }
        MouseEventKind::ScrollUp => {
            view.scroll_by(-SCROLL_STEP);
            None
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = geometry.nav_index_at_cell(mouse.column, mouse.row) {
                state.apply(Command::JumpToDestination(index));
            }
            None
        }
        _ => None,
    };
    if let Some(delta_x) = delta {
        state.wheel(&WheelEvent {
            delta_x,
            delta_y: 0.0,
            target: FocusTarget::None,
        });
    }
}

/// Touch mode: the left button stands in for a finger.
///
fn touch_mouse(mouse: MouseEvent, state: &mut State, geometry: &LayoutGeometry, now: Instant) {
    let point = LayoutGeometry::point_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => state.touch_start(
            point,
            geometry.element_at(mouse.column, mouse.row),
            geometry.nav_index_at_cell(mouse.column, mouse.row),
            now,
        ),
        MouseEventKind::Drag(MouseButton::Left) => state.touch_move(point, geometry),
        MouseEventKind::Up(MouseButton::Left) => state.touch_end(point, geometry, now),
        _ => {}
    }
}
