//! fltkit - UIKit-style widgets over a native GUI toolkit
//!
//! The native toolkit is reached through [`bridge::Toolkit`]. The crate ships
//! a headless backend so everything above the binding can run and be tested
//! without a display.

// Include the log module first so the log! macro works everywhere
#[macro_use]
pub mod log;

pub mod app;
pub mod bridge;
pub mod colors;
pub mod config;
pub mod error;
pub mod foundation;
pub mod manifest;
pub mod uikit;

pub use app::{fltk_version, run, version, Kit};
pub use bridge::{HeadlessToolkit, Toolkit, ToolkitHandle};
pub use colors::{Color, ColorSpec, Palette};
pub use config::KitConfig;
pub use error::{KitError, KitResult};
pub use foundation::{Rect, Size};
