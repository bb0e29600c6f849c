//! UILabel - frameless text box

use crate::bridge::{BoxType, RawWidget, ToolkitHandle};
use crate::colors::Color;
use crate::foundation::Rect;

use super::view::{UIView, Viewable};

/// Frame used when a label is created without one
pub const DEFAULT_LABEL_RECT: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

#[derive(Debug)]
pub struct UILabel {
    view: UIView,
}

impl UILabel {
    /// Create a label; `None` uses [`DEFAULT_LABEL_RECT`]
    pub fn new(toolkit: ToolkitHandle, rect: Option<Rect>, text: &str) -> Self {
        let rect = rect.unwrap_or(DEFAULT_LABEL_RECT);
        let id = toolkit.create_box(BoxType::NoBox, rect, text);

        let mut view = UIView::new();
        view.bind_raw(RawWidget::new(toolkit, id));
        Self { view }
    }

    pub fn set_text(&self, text: &str) {
        if let Some(raw) = self.view.raw() {
            raw.set_label(text);
        }
    }

    /// Label font size in pixels
    pub fn set_font_size(&self, px: i32) {
        if let Some(raw) = self.view.raw() {
            raw.set_label_size(px);
        }
    }

    pub fn set_text_color(&self, color: Color) {
        if let Some(raw) = self.view.raw() {
            raw.set_label_color(color);
        }
    }

    pub fn raw(&self) -> Option<&RawWidget> {
        self.view.raw()
    }
}

impl Viewable for UILabel {
    fn view(&self) -> &UIView {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{HeadlessToolkit, WidgetKind};
    use std::rc::Rc;

    #[test]
    fn test_label_defaults_and_setters() {
        let tk = Rc::new(HeadlessToolkit::new());
        let label = UILabel::new(tk.clone(), None, "Hello");
        label.set_text("World");
        label.set_font_size(18);
        label.set_text_color(Color::WHITE);

        let record = tk.widget(label.raw().unwrap().id()).unwrap();
        assert_eq!(record.kind, WidgetKind::Box(BoxType::NoBox));
        assert_eq!(record.rect, Rect::new(0, 0, 100, 30));
        assert_eq!(record.label, "World");
        assert_eq!(record.label_size, Some(18));
        assert_eq!(record.label_color, Some(Color::WHITE));
    }
}
