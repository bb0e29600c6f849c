//! Foundation types shared by every widget
//!
//! Geometry here is in integer pixels and depends on no UI module.

pub mod rect;

pub use rect::{Rect, Size, DEFAULT_SCREEN_SIZE};
