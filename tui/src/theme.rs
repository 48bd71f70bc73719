//! Colour themes.
//!
//! The active theme is chosen with `t` and remembered in the preferences file.

use ratatui::style::Color;

/// A colour theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Unique identifier, stored in preferences.
    pub id: &'static str,
    /// Display name for the theme.
    pub name: &'static str,

    /// Key hints, focused image, active mode.
    pub primary: Color,
    /// Titles and headings.
    pub secondary: Color,
    /// Card text.
    pub text: Color,
    /// Descriptions and disabled controls.
    pub dimmed: Color,
    /// Revealed answer text.
    pub answer: Color,
    pub success: Color,
    pub error: Color,

    /// Card frame at rest.
    pub card_border: Color,
    /// Card frame right after the card changed.
    pub card_flash: Color,
    /// Background behind the image overlay.
    pub overlay_bg: Color,
}

pub const DEFAULT: Theme = Theme {
    id: "default",
    name: "Default",
    primary: Color::Yellow,
    secondary: Color::Cyan,
    text: Color::White,
    dimmed: Color::DarkGray,
    answer: Color::Green,
    success: Color::Green,
    error: Color::Red,
    card_border: Color::Gray,
    card_flash: Color::Cyan,
    overlay_bg: Color::Black,
};

/// Warm tones on dark backgrounds.
pub const DARK: Theme = Theme {
    id: "dark",
    name: "Dark",
    primary: Color::Rgb(255, 215, 0),      // Gold
    secondary: Color::Rgb(100, 149, 237),  // Cornflower blue
    text: Color::Rgb(220, 220, 220),       // Light gray
    dimmed: Color::Rgb(110, 110, 110),     // Gray
    answer: Color::Rgb(144, 238, 144),     // Light green
    success: Color::Rgb(50, 205, 50),      // Lime green
    error: Color::Rgb(255, 99, 71),        // Tomato
    card_border: Color::Rgb(90, 90, 90),   // Dim gray
    card_flash: Color::Rgb(100, 149, 237), // Cornflower blue
    overlay_bg: Color::Rgb(16, 16, 16),    // Near black
};

/// Darker tones for light terminal backgrounds.
pub const LIGHT: Theme = Theme {
    id: "light",
    name: "Light",
    primary: Color::Rgb(184, 134, 11),    // Dark goldenrod
    secondary: Color::Rgb(0, 139, 139),   // Dark cyan
    text: Color::Rgb(33, 33, 33),         // Near black
    dimmed: Color::Rgb(130, 130, 130),    // Gray
    answer: Color::Rgb(0, 100, 0),        // Dark green
    success: Color::Rgb(34, 139, 34),     // Forest green
    error: Color::Rgb(178, 34, 34),       // Firebrick
    card_border: Color::Rgb(160, 160, 160),
    card_flash: Color::Rgb(0, 139, 139),
    overlay_bg: Color::Rgb(235, 235, 235),
};

/// Sandy gold and ocean blue.
pub const OCEAN: Theme = Theme {
    id: "ocean",
    name: "Ocean",
    primary: Color::Rgb(244, 208, 111),   // Sandy gold
    secondary: Color::Rgb(70, 130, 180),  // Steel blue
    text: Color::Rgb(240, 248, 255),      // Alice blue
    dimmed: Color::Rgb(119, 136, 153),    // Light slate gray
    answer: Color::Rgb(32, 178, 170),     // Light sea green
    success: Color::Rgb(32, 178, 170),
    error: Color::Rgb(205, 92, 92),       // Indian red
    card_border: Color::Rgb(65, 105, 225), // Royal blue
    card_flash: Color::Rgb(244, 208, 111),
    overlay_bg: Color::Rgb(25, 25, 112),  // Midnight blue
};

impl Theme {
    /// All available themes.
    pub const ALL: [Theme; 4] = [DEFAULT, DARK, LIGHT, OCEAN];

    /// Look up a theme by its ID, falling back to [`DEFAULT`].
    pub fn by_id(id: &str) -> &'static Theme {
        Theme::ALL.iter().find(|t| t.id == id).unwrap_or(&DEFAULT)
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let idx = Theme::ALL
            .iter()
            .position(|t| t.id == self.id)
            .unwrap_or(0);
        &Theme::ALL[(idx + 1) % Theme::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_falls_back() {
        assert_eq!(Theme::by_id("ocean").id, "ocean");
        assert_eq!(Theme::by_id("neon").id, "default");
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut theme = Theme::by_id("default");
        for _ in 0..Theme::ALL.len() {
            theme = theme.next();
        }
        assert_eq!(theme.id, "default");
        assert_eq!(DEFAULT.next().id, "dark");
    }
}
