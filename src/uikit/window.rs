//! UIWindow - top-level window with a root view

use std::rc::Rc;

use crate::bridge::{RawWidget, ToolkitHandle};
use crate::config::KitConfig;
use crate::foundation::Rect;

use super::screen::Screen;
use super::view::{UIView, Viewable};

/// A top-level window; subviews are added through its root view
#[derive(Debug)]
pub struct UIWindow {
    raw: RawWidget,
    root: UIView,
}

impl UIWindow {
    /// Create a window of the given size centered on the screen.
    ///
    /// Non-positive dimensions fall back to the default window size.
    pub fn new(toolkit: ToolkitHandle, width: i32, height: i32, title: &str) -> Self {
        Self::with_config(toolkit, &KitConfig::default(), width, height, title)
    }

    /// Like [`UIWindow::new`], with fallback sizes taken from `config`
    pub fn with_config(
        toolkit: ToolkitHandle,
        config: &KitConfig,
        width: i32,
        height: i32,
        title: &str,
    ) -> Self {
        let (width, height) = fallback_size(config, width, height);
        let screen = Screen::new(toolkit.clone());
        let rect = Rect::centered_in(screen.size(), width, height);
        Self::build(toolkit, rect, title)
    }

    /// Create a window at an explicit frame, or centered at the default size.
    ///
    /// Non-positive dimensions of the frame fall back to the default size.
    pub fn with_rect(toolkit: ToolkitHandle, rect: Option<Rect>, title: &str) -> Self {
        match rect {
            Some(rect) => {
                let config = KitConfig::default();
                let (width, height) = fallback_size(&config, rect.width, rect.height);
                Self::build(toolkit, Rect::new(rect.x, rect.y, width, height), title)
            }
            None => Self::new(toolkit, 0, 0, title),
        }
    }

    fn build(toolkit: ToolkitHandle, rect: Rect, title: &str) -> Self {
        let id = toolkit.create_window(rect, title);
        crate::log!(
            "UIWindow {:?} '{}' at {},{} {}x{}",
            id,
            title,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        let raw = RawWidget::new(toolkit, id);

        let mut root = UIView::new();
        root.bind_host(Rc::new(raw.clone()));

        Self { raw, root }
    }

    /// The view children are added to
    pub fn root_view(&self) -> &UIView {
        &self.root
    }

    /// Add a view to the window's root view
    pub fn add_subview(&self, child: &dyn Viewable) {
        self.root.add_subview(child);
    }

    pub fn remove_subview(&self, child: &dyn Viewable) {
        self.root.remove_subview(child);
    }

    pub fn show(&self) {
        self.raw.show();
    }

    pub fn raw(&self) -> &RawWidget {
        &self.raw
    }
}

/// Replace non-positive dimensions with the configured defaults
fn fallback_size(config: &KitConfig, width: i32, height: i32) -> (i32, i32) {
    let width = if width > 0 {
        width
    } else {
        config.default_window_width
    };
    let height = if height > 0 {
        height
    } else {
        config.default_window_height
    };
    (width, height)
}
