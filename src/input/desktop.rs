//! Keyboard and trackpad recognition for devices without touch.

use super::{Command, Timer};
use crate::config::{Keymap, PrimaryModifier, ShortcutAction};
use crate::state::{Overlays, PageId, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::*;
use std::time::Instant;

pub const CHORD_TIMEOUT_MS: u64 = 1000;

/// Horizontal wheel delta below which the event is treated as a mouse wheel.
///
const TRACKPAD_MIN_DELTA: f64 = 10.0;

/// Horizontal wheel delta that moves one destination.
///
pub const WHEEL_STEP_DELTA: f64 = 40.0;

/// Kind of element holding keyboard focus or under the pointer.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FocusTarget {
    #[default]
    None,
    TextInput,
    TextArea,
    ContentEditable,
    Select,
    Slider,
    Button,
}

impl FocusTarget {
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            FocusTarget::TextInput | FocusTarget::TextArea | FocusTarget::ContentEditable
        )
    }

    /// Controls that consume arrow keys themselves.
    ///
    pub fn is_interactive(&self) -> bool {
        self.is_text_input() || matches!(self, FocusTarget::Select | FocusTarget::Slider)
    }
}

/// A single wheel event.
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub target: FocusTarget,
}

#[derive(Debug)]
pub struct DesktopRecognizer {
    keymap: Keymap,
    modifier: PrimaryModifier,
    chord: Timer,
}

impl Default for DesktopRecognizer {
    fn default() -> Self {
        DesktopRecognizer::new(Keymap::default(), PrimaryModifier::default(), CHORD_TIMEOUT_MS)
    }
}

impl DesktopRecognizer {
    pub fn new(keymap: Keymap, modifier: PrimaryModifier, chord_timeout_ms: u64) -> Self {
        DesktopRecognizer {
            keymap,
            modifier,
            chord: Timer::from_millis(chord_timeout_ms),
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn modifier(&self) -> PrimaryModifier {
        self.modifier
    }

    pub fn chord_armed(&self) -> bool {
        self.chord.is_pending()
    }

    /// Expire a stale chord.
    ///
    pub fn tick(&mut self, now: Instant) {
        if self.chord.fire(now) {
            trace!("Chord expired");
        }
    }

    pub fn cancel_chord(&mut self) {
        self.chord.cancel();
    }

    /// Translate a key press. `focus` is the element holding keyboard focus.
    ///
    pub fn key(
        &mut self,
        event: &KeyEvent,
        focus: FocusTarget,
        overlays: Overlays,
        now: Instant,
    ) -> Option<Command> {
        self.tick(now);

        // The armed listener sees the next key once, then detaches.
        if self.chord.is_pending() {
            self.chord.cancel();
            if let (KeyCode::Char(c), KeyModifiers::NONE) = (event.code, event.modifiers) {
                if let Some(page) = self.keymap.chord_bindings.get(&c) {
                    debug!("Chord {}{} -> {}", self.keymap.chord_leader, c, page);
                    return Some(Command::from(*page));
                }
            }
        }

        let primary = self.modifier.key_modifiers();
        if event.modifiers.contains(primary) {
            if focus.is_text_input() {
                return None;
            }
            if let KeyCode::Char(c) = event.code {
                let action = self.keymap.modifier_bindings.get(&c.to_ascii_lowercase())?;
                return Some(match *action {
                    ShortcutAction::JumpToDestination(position) => {
                        Command::JumpToDestination(position)
                    }
                    ShortcutAction::OpenSettings => Command::Navigate(Route::Settings(None)),
                    ShortcutAction::ToggleNotifications => Command::ToggleNotifications,
                    ShortcutAction::OpenPage(page) => Command::from(page),
                });
            }
            return None;
        }

        match event.code {
            KeyCode::Esc => {
                if overlays.settings {
                    Some(Command::CloseSettings)
                } else if overlays.notifications {
                    Some(Command::CloseNotifications)
                } else if overlays.shortcuts_help {
                    Some(Command::CloseShortcutsHelp)
                } else {
                    None
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if !event.modifiers.is_empty() || overlays.any_panel() || focus.is_interactive() {
                    return None;
                }
                if event.code == KeyCode::Left {
                    Some(Command::PreviousDestination)
                } else {
                    Some(Command::NextDestination)
                }
            }
            KeyCode::Char(c) if focus.is_text_input() => {
                trace!("Ignoring '{}' typed into a text input", c);
                None
            }
            KeyCode::Char(c) if c == self.keymap.chord_leader && event.modifiers.is_empty() => {
                trace!("Chord armed");
                self.chord.arm(now);
                None
            }
            KeyCode::Char(c)
                if c == self.keymap.help_key
                    && event.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                Some(Command::Navigate(Route::ShortcutsHelp))
            }
            _ => None,
        }
    }

    /// Translate a wheel event into a destination step.
    ///
    pub fn wheel(&self, event: &WheelEvent, overlays: Overlays) -> Option<Command> {
        let dx = event.delta_x;
        if dx.abs() <= event.delta_y.abs() || dx.abs() <= TRACKPAD_MIN_DELTA {
            return None;
        }
        if event.target.is_text_input() || overlays.any_panel() {
            return None;
        }
        if dx > WHEEL_STEP_DELTA {
            Some(Command::NextDestination)
        } else if dx < -WHEEL_STEP_DELTA {
            Some(Command::PreviousDestination)
        } else {
            None
        }
    }
}

/// Destination one step from `current` in `order`, clamped at the ends.
///
pub fn step_destination(order: &[PageId], current: PageId, forward: bool) -> Option<PageId> {
    let index = order.iter().position(|page| *page == current)?;
    let next = if forward {
        index.checked_add(1).filter(|next| *next < order.len())?
    } else {
        index.checked_sub(1)?
    };
    order.get(next).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PRIMARY_DESTINATIONS;
    use std::time::Duration;

    const CLOSED: Overlays = Overlays {
        settings: false,
        notifications: false,
        shortcuts_help: false,
    };

    fn recognizer() -> DesktopRecognizer {
        DesktopRecognizer::new(Keymap::default(), PrimaryModifier::Control, CHORD_TIMEOUT_MS)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_chord_within_window_navigates() {
        let start = Instant::now();
        let mut desktop = recognizer();
        assert_eq!(desktop.key(&key(KeyCode::Char('g')), FocusTarget::None, CLOSED, start), None);
        assert!(desktop.chord_armed());
        let command = desktop.key(
            &key(KeyCode::Char('d')),
            FocusTarget::None,
            CLOSED,
            start + Duration::from_millis(900),
        );
        assert_eq!(command, Some(Command::from(PageId::Dashboard)));
        assert!(!desktop.chord_armed());
    }

    #[test]
    fn test_chord_expires_after_timeout() {
        let start = Instant::now();
        let mut desktop = recognizer();
        desktop.key(&key(KeyCode::Char('g')), FocusTarget::None, CLOSED, start);
        let command = desktop.key(
            &key(KeyCode::Char('d')),
            FocusTarget::None,
            CLOSED,
            start + Duration::from_millis(1100),
        );
        assert_eq!(command, None);
    }

    #[test]
    fn test_tick_detaches_expired_chord() {
        let start = Instant::now();
        let mut desktop = recognizer();
        desktop.key(&key(KeyCode::Char('g')), FocusTarget::None, CLOSED, start);
        desktop.tick(start + Duration::from_millis(999));
        assert!(desktop.chord_armed());
        desktop.tick(start + Duration::from_millis(1000));
        assert!(!desktop.chord_armed());
    }

    #[test]
    fn test_rearming_chord_restarts_window() {
        let start = Instant::now();
        let mut desktop = recognizer();
        desktop.key(&key(KeyCode::Char('g')), FocusTarget::None, CLOSED, start);
        // A second 'g' detaches the first listener and arms a fresh one.
        let leader = key(KeyCode::Char('g'));
        desktop.key(&leader, FocusTarget::None, CLOSED, start + Duration::from_millis(800));
        assert!(desktop.chord_armed());
        desktop.key(&leader, FocusTarget::None, CLOSED, start + Duration::from_millis(900));
        let command = desktop.key(
            &key(KeyCode::Char('r')),
            FocusTarget::None,
            CLOSED,
            start + Duration::from_millis(1800),
        );
        assert_eq!(command, Some(Command::from(PageId::Rss)));
    }

    #[test]
    fn test_unbound_follow_up_disarms() {
        let start = Instant::now();
        let mut desktop = recognizer();
        desktop.key(&key(KeyCode::Char('g')), FocusTarget::None, CLOSED, start);
        assert_eq!(desktop.key(&key(KeyCode::Char('z')), FocusTarget::None, CLOSED, start), None);
        assert_eq!(desktop.key(&key(KeyCode::Char('d')), FocusTarget::None, CLOSED, start), None);
    }

    #[test]
    fn test_chord_not_armed_in_text_input() {
        let start = Instant::now();
        let mut desktop = recognizer();
        desktop.key(&key(KeyCode::Char('g')), FocusTarget::TextInput, CLOSED, start);
        assert!(!desktop.chord_armed());
    }

    #[test]
    fn test_modifier_shortcuts() {
        let now = Instant::now();
        let mut desktop = recognizer();
        assert_eq!(
            desktop.key(&ctrl('3'), FocusTarget::None, CLOSED, now),
            Some(Command::JumpToDestination(2))
        );
        assert_eq!(
            desktop.key(&ctrl(','), FocusTarget::None, CLOSED, now),
            Some(Command::Navigate(Route::Settings(None)))
        );
        assert_eq!(
            desktop.key(&ctrl('n'), FocusTarget::None, CLOSED, now),
            Some(Command::ToggleNotifications)
        );
        assert_eq!(
            desktop.key(&ctrl('l'), FocusTarget::None, CLOSED, now),
            Some(Command::from(PageId::Logs))
        );
        assert_eq!(
            desktop.key(&ctrl('u'), FocusTarget::None, CLOSED, now),
            Some(Command::from(PageId::UploadManager))
        );
        assert_eq!(desktop.key(&ctrl('7'), FocusTarget::None, CLOSED, now), None);
    }

    #[test]
    fn test_modifier_shortcuts_suppressed_in_text_input() {
        let now = Instant::now();
        let mut desktop = recognizer();
        assert_eq!(desktop.key(&ctrl('1'), FocusTarget::TextArea, CLOSED, now), None);
        assert_eq!(desktop.key(&ctrl('n'), FocusTarget::ContentEditable, CLOSED, now), None);
    }

    #[test]
    fn test_escape_closes_settings_first() {
        let now = Instant::now();
        let mut desktop = recognizer();
        let both = Overlays {
            settings: true,
            notifications: false,
            shortcuts_help: true,
        };
        assert_eq!(
            desktop.key(&key(KeyCode::Esc), FocusTarget::None, both, now),
            Some(Command::CloseSettings)
        );
        let notifications = Overlays {
            notifications: true,
            ..CLOSED
        };
        assert_eq!(
            desktop.key(&key(KeyCode::Esc), FocusTarget::None, notifications, now),
            Some(Command::CloseNotifications)
        );
        assert_eq!(desktop.key(&key(KeyCode::Esc), FocusTarget::None, CLOSED, now), None);
    }

    #[test]
    fn test_arrow_keys() {
        let now = Instant::now();
        let mut desktop = recognizer();
        assert_eq!(
            desktop.key(&key(KeyCode::Right), FocusTarget::None, CLOSED, now),
            Some(Command::NextDestination)
        );
        assert_eq!(
            desktop.key(&key(KeyCode::Left), FocusTarget::Button, CLOSED, now),
            Some(Command::PreviousDestination)
        );
        assert_eq!(desktop.key(&key(KeyCode::Left), FocusTarget::Slider, CLOSED, now), None);
        assert_eq!(desktop.key(&key(KeyCode::Left), FocusTarget::Select, CLOSED, now), None);
        let settings = Overlays {
            settings: true,
            ..CLOSED
        };
        assert_eq!(desktop.key(&key(KeyCode::Left), FocusTarget::None, settings, now), None);
        let shifted = KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT);
        assert_eq!(desktop.key(&shifted, FocusTarget::None, CLOSED, now), None);
    }

    #[test]
    fn test_help_key() {
        let now = Instant::now();
        let mut desktop = recognizer();
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            desktop.key(&question, FocusTarget::None, CLOSED, now),
            Some(Command::Navigate(Route::ShortcutsHelp))
        );
        assert_eq!(desktop.key(&question, FocusTarget::TextInput, CLOSED, now), None);
    }

    #[test]
    fn test_wheel_classification() {
        let desktop = recognizer();
        let wheel = |delta_x, delta_y| WheelEvent {
            delta_x,
            delta_y,
            target: FocusTarget::None,
        };
        assert_eq!(desktop.wheel(&wheel(50.0, 5.0), CLOSED), Some(Command::NextDestination));
        assert_eq!(desktop.wheel(&wheel(-45.0, 0.0), CLOSED), Some(Command::PreviousDestination));
        assert_eq!(desktop.wheel(&wheel(30.0, 0.0), CLOSED), None);
        assert_eq!(desktop.wheel(&wheel(8.0, 0.0), CLOSED), None);
        assert_eq!(desktop.wheel(&wheel(60.0, 80.0), CLOSED), None);
        let notifications = Overlays {
            notifications: true,
            ..CLOSED
        };
        assert_eq!(desktop.wheel(&wheel(60.0, 0.0), notifications), None);
        let typing = WheelEvent {
            target: FocusTarget::TextInput,
            ..wheel(60.0, 0.0)
        };
        assert_eq!(desktop.wheel(&typing, CLOSED), None);
    }

    #[test]
    fn test_step_destination_clamps() {
        let order = PRIMARY_DESTINATIONS;
        assert_eq!(step_destination(&order, PageId::Dashboard, true), Some(PageId::Channels));
        assert_eq!(step_destination(&order, PageId::Dashboard, false), None);
        assert_eq!(step_destination(&order, PageId::VideoStudio, true), None);
        assert_eq!(step_destination(&order, PageId::VideoStudio, false), Some(PageId::Tmdb));
        assert_eq!(step_destination(&order, PageId::Logs, true), None);
    }
}
