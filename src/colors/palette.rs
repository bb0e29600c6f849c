//! Named colors resolved from a toolkit
//!
//! The toolkit decides what "background" or "selection" look like, so the
//! palette is built once during setup from a live toolkit handle instead of
//! being computed at load time.

use std::collections::HashMap;

use crate::bridge::{SystemColor, Toolkit};

use super::color::{Color, ColorParseError, ColorSpec};

/// Snapshot of the toolkit's named colors
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: HashMap<SystemColor, Color>,
}

impl Palette {
    /// Query every named color from the toolkit
    pub fn load(toolkit: &dyn Toolkit) -> Self {
        let colors = SystemColor::ALL
            .into_iter()
            .map(|slot| (slot, toolkit.system_color(slot)))
            .collect();
        crate::log!("Palette loaded from {} toolkit", toolkit.name());
        Self { colors }
    }

    /// Color of a named slot
    pub fn color(&self, slot: SystemColor) -> Color {
        self.colors
            .get(&slot)
            .copied()
            .unwrap_or_else(|| slot.default_color())
    }

    /// Look up a color by its name ("dark-red", "selection", ...)
    pub fn by_name(&self, name: &str) -> Result<Color, ColorParseError> {
        SystemColor::from_name(name)
            .map(|slot| self.color(slot))
            .ok_or_else(|| ColorParseError::UnknownName(name.trim().to_string()))
    }

    /// Parse any textual color, falling back to the named colors
    pub fn parse(&self, text: &str) -> Result<Color, ColorParseError> {
        match Color::parse(ColorSpec::Text(text)) {
            Ok(color) => Ok(color),
            Err(ColorParseError::Empty) => Err(ColorParseError::Empty),
            Err(err) => self.by_name(text).map_err(|_| err),
        }
    }

    pub fn foreground(&self) -> Color {
        self.color(SystemColor::Foreground)
    }

    pub fn background(&self) -> Color {
        self.color(SystemColor::Background)
    }

    pub fn background2(&self) -> Color {
        self.color(SystemColor::Background2)
    }

    pub fn inactive(&self) -> Color {
        self.color(SystemColor::Inactive)
    }

    pub fn selection(&self) -> Color {
        self.color(SystemColor::Selection)
    }
}
