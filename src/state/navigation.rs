//! Navigation state and the controller that owns it.
//!
//! `Navigator` is the only writer of `NavigationState`. Every collaborator
//! request flows through one of its methods, and the rendering layer reads
//! the resulting state back through `state()`.

use super::page::{PageId, Route, SettingsSection};
use log::*;

/// Specifying the user-visible modes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Browsing,
    SettingsOpen,
    NotificationsOpen,
    Dragging,
}

/// What is visible right now.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NavigationState {
    pub current_page: PageId,
    pub previous_page: Option<PageId>,
    pub page_before_settings: PageId,
    pub settings_open: bool,
    pub notifications_open: bool,
    pub settings_initial_page: Option<SettingsSection>,
    pub shortcuts_help_open: bool,
    pub scroll_reset_pending: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            current_page: PageId::Dashboard,
            previous_page: None,
            page_before_settings: PageId::Dashboard,
            settings_open: false,
            notifications_open: false,
            settings_initial_page: None,
            shortcuts_help_open: false,
            scroll_reset_pending: false,
        }
    }
}

/// Snapshot of the overlay flags, used to detect overlay transitions.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Overlays {
    pub settings: bool,
    pub notifications: bool,
    pub shortcuts_help: bool,
}

impl Overlays {
    pub fn any_panel(&self) -> bool {
        self.settings || self.notifications
    }
}

/// Root navigation state machine.
///
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavigationState,
    dragging: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_page(&self) -> PageId {
        self.state.current_page
    }

    pub fn overlays(&self) -> Overlays {
        Overlays {
            settings: self.state.settings_open,
            notifications: self.state.notifications_open,
            shortcuts_help: self.state.shortcuts_help_open,
        }
    }

    /// Return the current mode. Dragging takes precedence over overlays.
    ///
    pub fn mode(&self) -> Mode {
        if self.dragging {
            Mode::Dragging
        } else if self.state.settings_open {
            Mode::SettingsOpen
        } else if self.state.notifications_open {
            Mode::NotificationsOpen
        } else {
            Mode::Browsing
        }
    }

    /// Enter or leave the dragging mode. Only the drag controller calls this.
    ///
    pub fn set_dragging(&mut self, dragging: bool) -> &mut Self {
        if self.dragging != dragging {
            debug!("Dragging mode {}", if dragging { "entered" } else { "left" });
        }
        self.dragging = dragging;
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply a navigation request, optionally naming the page it came from.
    ///
    pub fn navigate(&mut self, route: Route, from: Option<PageId>) -> &mut Self {
        if self.dragging {
            debug!("Ignoring navigation to {:?} while dragging", route);
            return self;
        }

        match route {
            Route::Settings(section) => {
                debug!("Opening settings (section {:?})...", section);
                if !self.state.settings_open && !self.state.current_page.is_static() {
                    self.state.page_before_settings = self.state.current_page;
                }
                self.state.settings_open = true;
                self.state.settings_initial_page = section;
                self.state.notifications_open = false;
            }
            Route::ShortcutsHelp => {
                debug!("Opening shortcuts help...");
                self.state.shortcuts_help_open = true;
            }
            Route::Login => {
                debug!("Resetting to landing page for login");
                self.state.current_page = PageId::Dashboard;
            }
            Route::Page(page) => {
                self.state.previous_page = Some(from.unwrap_or(self.state.current_page));
                self.state.current_page = page;
                if page.is_static() {
                    self.state.settings_open = false;
                }
                self.state.scroll_reset_pending = true;
                info!(
                    "Navigated to '{}' (previous '{}')",
                    page,
                    self.state.previous_page.unwrap_or(PageId::Dashboard)
                );
            }
        }
        self
    }

    /// Return to the previous page if one was recorded.
    ///
    pub fn back(&mut self) -> &mut Self {
        if let Some(previous) = self.state.previous_page {
            self.navigate(Route::Page(previous), None);
        }
        self
    }

    pub fn toggle_settings(&mut self) -> &mut Self {
        if self.dragging {
            return self;
        }
        if !self.state.settings_open && !self.state.current_page.is_static() {
            self.state.page_before_settings = self.state.current_page;
        }
        self.state.settings_open = !self.state.settings_open;
        self.state.notifications_open = false;
        if !self.state.settings_open {
            self.state.settings_initial_page = None;
        }
        self
    }

    /// Close settings. Leaving a static page reached from settings returns
    /// to the page settings was opened from.
    ///
    pub fn close_settings(&mut self) -> &mut Self {
        if self.dragging {
            return self;
        }
        self.state.settings_open = false;
        self.state.settings_initial_page = None;
        if self.state.current_page.is_static() {
            debug!(
                "Restoring '{}' after leaving static page '{}'",
                self.state.page_before_settings, self.state.current_page
            );
            self.state.current_page = self.state.page_before_settings;
        }
        self
    }

    pub fn toggle_notifications(&mut self) -> &mut Self {
        if self.dragging {
            return self;
        }
        self.state.notifications_open = !self.state.notifications_open;
        self.state.settings_open = false;
        self.state.settings_initial_page = None;
        self
    }

    pub fn close_notifications(&mut self) -> &mut Self {
        if self.dragging {
            return self;
        }
        self.state.notifications_open = false;
        self
    }

    pub fn close_shortcuts_help(&mut self) -> &mut Self {
        self.state.shortcuts_help_open = false;
        self
    }

    /// Consume the scroll reset raised by the last navigation.
    ///
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.state.scroll_reset_pending)
    }

    /// Drop everything back to session defaults.
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.state = NavigationState::default();
        self.dragging = false;
        self
    }
}
