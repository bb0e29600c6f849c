//! Named colors provided by the toolkit

use crate::colors::Color;

/// The toolkit's named color slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SystemColor {
    // System
    Foreground,
    Background,
    Background2,
    Inactive,
    Selection,
    // Grays
    Gray0,
    Dark3,
    Dark2,
    Dark1,
    Light1,
    Light2,
    Light3,
    // Base
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    // Dark variants
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
}

impl SystemColor {
    pub const ALL: [SystemColor; 26] = [
        SystemColor::Foreground,
        SystemColor::Background,
        SystemColor::Background2,
        SystemColor::Inactive,
        SystemColor::Selection,
        SystemColor::Gray0,
        SystemColor::Dark3,
        SystemColor::Dark2,
        SystemColor::Dark1,
        SystemColor::Light1,
        SystemColor::Light2,
        SystemColor::Light3,
        SystemColor::Black,
        SystemColor::White,
        SystemColor::Red,
        SystemColor::Green,
        SystemColor::Blue,
        SystemColor::Yellow,
        SystemColor::Magenta,
        SystemColor::Cyan,
        SystemColor::DarkRed,
        SystemColor::DarkGreen,
        SystemColor::DarkYellow,
        SystemColor::DarkBlue,
        SystemColor::DarkMagenta,
        SystemColor::DarkCyan,
    ];

    /// Lower-case name as accepted by color lookups
    pub fn name(&self) -> &'static str {
        match self {
            SystemColor::Foreground => "foreground",
            SystemColor::Background => "background",
            SystemColor::Background2 => "background2",
            SystemColor::Inactive => "inactive",
            SystemColor::Selection => "selection",
            SystemColor::Gray0 => "gray0",
            SystemColor::Dark3 => "dark3",
            SystemColor::Dark2 => "dark2",
            SystemColor::Dark1 => "dark1",
            SystemColor::Light1 => "light1",
            SystemColor::Light2 => "light2",
            SystemColor::Light3 => "light3",
            SystemColor::Black => "black",
            SystemColor::White => "white",
            SystemColor::Red => "red",
            SystemColor::Green => "green",
            SystemColor::Blue => "blue",
            SystemColor::Yellow => "yellow",
            SystemColor::Magenta => "magenta",
            SystemColor::Cyan => "cyan",
            SystemColor::DarkRed => "dark-red",
            SystemColor::DarkGreen => "dark-green",
            SystemColor::DarkYellow => "dark-yellow",
            SystemColor::DarkBlue => "dark-blue",
            SystemColor::DarkMagenta => "dark-magenta",
            SystemColor::DarkCyan => "dark-cyan",
        }
    }

    /// Parse from a name (case and surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// RGB of the toolkit's stock colormap for this slot
    pub fn default_color(&self) -> Color {
        let rgb = match self {
            SystemColor::Foreground => 0x000000,
            SystemColor::Background => 0xC0C0C0,
            SystemColor::Background2 => 0xFFFFFF,
            SystemColor::Inactive => 0x8E8E8E,
            SystemColor::Selection => 0x000080,
            SystemColor::Gray0 => 0x000000,
            SystemColor::Dark3 => 0x4D4D4D,
            SystemColor::Dark2 => 0x909090,
            SystemColor::Dark1 => 0xA6A6A6,
            SystemColor::Light1 => 0xC7C7C7,
            SystemColor::Light2 => 0xDEDEDE,
            SystemColor::Light3 => 0xF4F4F4,
            SystemColor::Black => 0x000000,
            SystemColor::White => 0xFFFFFF,
            SystemColor::Red => 0xFF0000,
            SystemColor::Green => 0x00FF00,
            SystemColor::Blue => 0x0000FF,
            SystemColor::Yellow => 0xFFFF00,
            SystemColor::Magenta => 0xFF00FF,
            SystemColor::Cyan => 0x00FFFF,
            SystemColor::DarkRed => 0x800000,
            SystemColor::DarkGreen => 0x008000,
            SystemColor::DarkYellow => 0x808000,
            SystemColor::DarkBlue => 0x000080,
            SystemColor::DarkMagenta => 0x800080,
            SystemColor::DarkCyan => 0x008080,
        };
        Color::from_u32(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_color_names_roundtrip() {
        for color in SystemColor::ALL {
            assert_eq!(SystemColor::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn test_system_color_from_name_normalizes() {
        assert_eq!(
            SystemColor::from_name("  Dark-Red "),
            Some(SystemColor::DarkRed)
        );
        assert_eq!(SystemColor::from_name("mauve"), None);
    }
}
