//! UIButton - push button

use crate::bridge::{RawWidget, ToolkitHandle};
use crate::colors::Color;
use crate::foundation::Rect;

use super::view::{UIView, Viewable};

/// Frame used when a button is created without one
pub const DEFAULT_BUTTON_RECT: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 36,
};

#[derive(Debug)]
pub struct UIButton {
    view: UIView,
}

impl UIButton {
    /// Create a button; `None` uses [`DEFAULT_BUTTON_RECT`]
    pub fn new(toolkit: ToolkitHandle, rect: Option<Rect>, title: &str) -> Self {
        let rect = rect.unwrap_or(DEFAULT_BUTTON_RECT);
        let id = toolkit.create_button(rect, title);
        crate::log!("UIButton {:?} '{}'", id, title);

        let mut view = UIView::new();
        view.bind_raw(RawWidget::new(toolkit, id));
        Self { view }
    }

    pub fn set_title(&self, title: &str) {
        if let Some(raw) = self.view.raw() {
            raw.set_label(title);
        }
    }

    pub fn set_background_color(&self, color: Color) {
        if let Some(raw) = self.view.raw() {
            raw.set_color(color);
        }
    }

    /// Run `action` when the button is pressed and released
    pub fn on_touch_up_inside(&self, action: impl FnMut() + 'static) {
        if let Some(raw) = self.view.raw() {
            raw.set_callback(action);
        }
    }

    pub fn raw(&self) -> Option<&RawWidget> {
        self.view.raw()
    }
}

impl Viewable for UIButton {
    fn view(&self) -> &UIView {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{HeadlessToolkit, WidgetKind};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_button_default_rect() {
        let tk = Rc::new(HeadlessToolkit::new());
        let button = UIButton::new(tk.clone(), None, "OK");

        let record = tk.widget(button.raw().unwrap().id()).unwrap();
        assert_eq!(record.kind, WidgetKind::Button);
        assert_eq!(record.rect, Rect::new(0, 0, 120, 36));
        assert_eq!(record.label, "OK");
    }

    #[test]
    fn test_button_forwards_title_and_color() {
        let tk = Rc::new(HeadlessToolkit::new());
        let button = UIButton::new(tk.clone(), Some(Rect::new(10, 10, 50, 20)), "A");

        button.set_title("B");
        button.set_background_color(Color::rgb(0x21, 0x96, 0xF3));

        let record = tk.widget(button.raw().unwrap().id()).unwrap();
        assert_eq!(record.rect, Rect::new(10, 10, 50, 20));
        assert_eq!(record.label, "B");
        assert_eq!(record.color, Some(Color::rgb(0x21, 0x96, 0xF3)));
    }

    #[test]
    fn test_button_touch_up_inside() {
        let tk = Rc::new(HeadlessToolkit::new());
        let button = UIButton::new(tk.clone(), None, "Tap");
        let taps = Rc::new(Cell::new(0));
        let counter = taps.clone();

        button.on_touch_up_inside(move || counter.set(counter.get() + 1));
        let id = button.raw().unwrap().id();
        tk.click(id);
        tk.click(id);

        assert_eq!(taps.get(), 2);
        assert!(tk.widget(id).unwrap().has_callback);
    }
}
