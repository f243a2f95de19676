//! Keyboard shortcut configuration.
//!
//! Defines the shortcut actions, the primary modifier, and the default
//! bindings used by the desktop recognizer and the shortcuts-help overlay.

use crate::state::PageId;
use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions reachable with the primary modifier held.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    /// Jump to the destination at this position of the bottom bar.
    JumpToDestination(usize),
    OpenSettings,
    ToggleNotifications,
    OpenPage(PageId),
}

/// Which modifier acts as the primary shortcut modifier.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryModifier {
    /// Command on macOS, Control elsewhere.
    #[default]
    Auto,
    Control,
    Super,
}

impl PrimaryModifier {
    pub fn key_modifiers(&self) -> KeyModifiers {
        match self {
            PrimaryModifier::Auto if cfg!(target_os = "macos") => KeyModifiers::SUPER,
            PrimaryModifier::Auto | PrimaryModifier::Control => KeyModifiers::CONTROL,
            PrimaryModifier::Super => KeyModifiers::SUPER,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.key_modifiers() == KeyModifiers::SUPER {
            "Cmd"
        } else {
            "Ctrl"
        }
    }
}

/// Key bindings for the desktop recognizer.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default = "default_modifier_bindings")]
    pub modifier_bindings: HashMap<char, ShortcutAction>,
    #[serde(default = "default_chord_leader")]
    pub chord_leader: char,
    #[serde(default = "default_chord_bindings")]
    pub chord_bindings: HashMap<char, PageId>,
    #[serde(default = "default_help_key")]
    pub help_key: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap {
            modifier_bindings: default_modifier_bindings(),
            chord_leader: default_chord_leader(),
            chord_bindings: default_chord_bindings(),
            help_key: default_help_key(),
        }
    }
}

fn default_modifier_bindings() -> HashMap<char, ShortcutAction> {
    let mut bindings = HashMap::new();
    for (position, digit) in ['1', '2', '3', '4', '5', '6'].into_iter().enumerate() {
        bindings.insert(digit, ShortcutAction::JumpToDestination(position));
    }
    bindings.insert(',', ShortcutAction::OpenSettings);
    bindings.insert('n', ShortcutAction::ToggleNotifications);
    bindings.insert('l', ShortcutAction::OpenPage(PageId::Logs));
    bindings.insert('u', ShortcutAction::OpenPage(PageId::UploadManager));
    bindings
}

fn default_chord_leader() -> char {
    'g'
}

fn default_chord_bindings() -> HashMap<char, PageId> {
    HashMap::from([
        ('d', PageId::Dashboard),
        ('c', PageId::Channels),
        ('p', PageId::Platforms),
        ('r', PageId::Rss),
        ('t', PageId::Tmdb),
        ('v', PageId::VideoStudio),
        ('l', PageId::Logs),
        ('u', PageId::UploadManager),
    ])
}

fn default_help_key() -> char {
    '?'
}

/// Formats a modifier binding for display, e.g. `Ctrl+,`.
///
pub fn format_binding_display(modifier: PrimaryModifier, key: char) -> String {
    format!("{}+{}", modifier.label(), key.to_ascii_uppercase())
}

impl Keymap {
    /// Rows for the shortcuts-help overlay, sorted by key.
    ///
    pub fn help_entries(&self, modifier: PrimaryModifier) -> Vec<(String, String)> {
        let mut modifier_rows: Vec<_> = self
            .modifier_bindings
            .iter()
            .map(|(key, action)| {
                let description = match action {
                    ShortcutAction::JumpToDestination(position) => {
                        format!("Go to bottom bar item {}", position + 1)
                    }
                    ShortcutAction::OpenSettings => "Open settings".to_string(),
                    ShortcutAction::ToggleNotifications => "Toggle notifications".to_string(),
                    ShortcutAction::OpenPage(page) => format!("Open {}", page.title()),
                };
                (format_binding_display(modifier, *key), description)
            })
            .collect();
        modifier_rows.sort();

        let mut chord_rows: Vec<_> = self
            .chord_bindings
            .iter()
            .map(|(key, page)| {
                (
                    format!("{} then {}", self.chord_leader, key),
                    format!("Go to {}", page.title()),
                )
            })
            .collect();
        chord_rows.sort();

        modifier_rows
            .into_iter()
            .chain(chord_rows)
            .chain([
                ("Left/Right".to_string(), "Previous/next destination".to_string()),
                ("Esc".to_string(), "Close panel".to_string()),
                (self.help_key.to_string(), "Show this help".to_string()),
            ])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.modifier_bindings.get(&'1'),
            Some(&ShortcutAction::JumpToDestination(0))
        );
        assert_eq!(
            keymap.modifier_bindings.get(&'6'),
            Some(&ShortcutAction::JumpToDestination(5))
        );
        assert_eq!(keymap.chord_bindings.get(&'d'), Some(&PageId::Dashboard));
        assert_eq!(keymap.chord_leader, 'g');
    }

    #[test]
    fn test_explicit_modifiers() {
        assert_eq!(PrimaryModifier::Control.key_modifiers(), KeyModifiers::CONTROL);
        assert_eq!(PrimaryModifier::Super.key_modifiers(), KeyModifiers::SUPER);
        assert_eq!(format_binding_display(PrimaryModifier::Control, 'n'), "Ctrl+N");
    }

    #[test]
    fn test_help_entries_cover_bindings() {
        let keymap = Keymap::default();
        let entries = keymap.help_entries(PrimaryModifier::Control);
        assert_eq!(
            entries.len(),
            keymap.modifier_bindings.len() + keymap.chord_bindings.len() + 3
        );
        assert!(entries.iter().any(|(key, _)| key == "g then d"));
    }

    #[test]
    fn test_keymap_yaml_round_trip() {
        let keymap = Keymap::default();
        let yaml = serde_yaml::to_string(&keymap).unwrap();
        let parsed: Keymap = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, keymap);
    }

    #[test]
    fn test_partial_keymap_uses_defaults() {
        let parsed: Keymap = serde_yaml::from_str("chord_leader: h\n").unwrap();
        assert_eq!(parsed.chord_leader, 'h');
        assert_eq!(parsed.chord_bindings, default_chord_bindings());
    }
}
