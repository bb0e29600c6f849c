//! Colors: value type, parsing, and the toolkit's named palette

pub mod color;
pub mod palette;
mod parser;

pub use color::{Color, ColorParseError, ColorSpec};
pub use palette::Palette;
