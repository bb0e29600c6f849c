//! Primary display metrics

use std::cell::OnceCell;

use crate::bridge::ToolkitHandle;
use crate::foundation::{Size, DEFAULT_SCREEN_SIZE};

/// The primary display, queried lazily and cached
pub struct Screen {
    toolkit: ToolkitHandle,
    size: OnceCell<Size>,
}

impl Screen {
    pub fn new(toolkit: ToolkitHandle) -> Self {
        Self {
            toolkit,
            size: OnceCell::new(),
        }
    }

    /// Display size in pixels
    pub fn size(&self) -> Size {
        *self.size.get_or_init(|| {
            let size = self.toolkit.screen_size();
            if size.width <= 0 || size.height <= 0 {
                crate::log!(
                    "Screen: {} reported {}x{}, assuming {}x{}",
                    self.toolkit.name(),
                    size.width,
                    size.height,
                    DEFAULT_SCREEN_SIZE.width,
                    DEFAULT_SCREEN_SIZE.height
                );
                DEFAULT_SCREEN_SIZE
            } else {
                size
            }
        })
    }

    pub fn width(&self) -> i32 {
        self.size().width
    }

    pub fn height(&self) -> i32 {
        self.size().height
    }
}
