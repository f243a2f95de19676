use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color palette used by the dashboard shell.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub surface: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,

    // Bottom bar drag feedback
    pub drag_source: ColorSpec,
    pub drag_target: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::rose_pine()
    }
}

impl Theme {
    /// Rose Pine, the dark variant.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::rgb(196, 167, 231), // Iris
            accent: ColorSpec::rgb(235, 188, 186),  // Rose
            text: ColorSpec::rgb(224, 222, 244),
            text_muted: ColorSpec::rgb(110, 106, 134),
            surface: ColorSpec::rgb(31, 29, 46),
            border_active: ColorSpec::rgb(196, 167, 231),
            border_normal: ColorSpec::rgb(64, 61, 82),
            drag_source: ColorSpec::rgb(246, 193, 119), // Gold
            drag_target: ColorSpec::rgb(156, 207, 216), // Foam
        }
    }
}
