//! Headless toolkit backend
//!
//! Keeps every widget in memory instead of talking to a display. Used by the
//! test suite and by builds that have no native toolkit linked in. Tests can
//! inspect the recorded widget tree and fire callbacks as if a user clicked.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::colors::Color;
use crate::error::{KitError, KitResult};
use crate::foundation::{Rect, Size, DEFAULT_SCREEN_SIZE};

use super::{
    BoxType, DrawCellHandler, HostTable, RowEventHandler, SystemColor, Toolkit, WidgetCallback,
    WidgetId,
};

type SharedCallback = Rc<RefCell<WidgetCallback>>;

/// Kind of a recorded widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Window,
    Button,
    Box(BoxType),
}

/// Snapshot of a widget's recorded state
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetRecord {
    pub kind: WidgetKind,
    pub rect: Rect,
    pub label: String,
    pub label_size: Option<i32>,
    pub label_color: Option<Color>,
    pub color: Option<Color>,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,
    pub visible: bool,
    pub has_callback: bool,
}

struct WidgetEntry {
    record: WidgetRecord,
    callback: Option<SharedCallback>,
}

#[derive(Default)]
struct ToolkitState {
    next_id: u64,
    widgets: HashMap<WidgetId, WidgetEntry>,
    tables: Vec<HeadlessTable>,
    run_count: usize,
}

/// In-memory [`Toolkit`] implementation
pub struct HeadlessToolkit {
    screen: Size,
    tables_enabled: bool,
    colors: HashMap<SystemColor, Color>,
    state: RefCell<ToolkitState>,
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self {
            screen: DEFAULT_SCREEN_SIZE,
            tables_enabled: true,
            colors: HashMap::new(),
            state: RefCell::new(ToolkitState::default()),
        }
    }

    /// Report a different screen size
    pub fn with_screen_size(mut self, size: Size) -> Self {
        self.screen = size;
        self
    }

    /// Behave like a build without table support
    pub fn without_tables(mut self) -> Self {
        self.tables_enabled = false;
        self
    }

    /// Override one named color
    pub fn with_system_color(mut self, slot: SystemColor, color: Color) -> Self {
        self.colors.insert(slot, color);
        self
    }

    /// Recorded state of a widget
    pub fn widget(&self, id: WidgetId) -> Option<WidgetRecord> {
        self.state
            .borrow()
            .widgets
            .get(&id)
            .map(|entry| entry.record.clone())
    }

    /// Number of widgets created so far
    pub fn widget_count(&self) -> usize {
        self.state.borrow().widgets.len()
    }

    /// Tables created so far, in creation order
    pub fn tables(&self) -> Vec<HeadlessTable> {
        self.state.borrow().tables.clone()
    }

    /// How many times the event loop was entered
    pub fn run_count(&self) -> usize {
        self.state.borrow().run_count
    }

    /// Fire a widget's callback as if the user activated it.
    ///
    /// Returns false when the widget has no callback.
    pub fn click(&self, id: WidgetId) -> bool {
        // Release the state borrow before running user code
        let callback = self
            .state
            .borrow()
            .widgets
            .get(&id)
            .and_then(|entry| entry.callback.clone());

        let Some(callback) = callback else {
            return false;
        };
        let clicked = match callback.try_borrow_mut() {
            Ok(mut callback) => {
                (*callback)();
                true
            }
            Err(_) => {
                crate::log!("headless: callback of {:?} already running", id);
                false
            }
        };
        clicked
    }

    fn insert(&self, kind: WidgetKind, rect: Rect, label: &str) -> WidgetId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = WidgetId(state.next_id);
        state.widgets.insert(
            id,
            WidgetEntry {
                record: WidgetRecord {
                    kind,
                    rect,
                    label: label.to_string(),
                    label_size: None,
                    label_color: None,
                    color: None,
                    parent: None,
                    children: Vec::new(),
                    visible: false,
                    has_callback: false,
                },
                callback: None,
            },
        );
        id
    }

    fn update(&self, id: WidgetId, f: impl FnOnce(&mut WidgetEntry)) {
        match self.state.borrow_mut().widgets.get_mut(&id) {
            Some(entry) => f(entry),
            None => crate::log!("headless: unknown widget {:?}", id),
        }
    }
}

impl Toolkit for HeadlessToolkit {
    fn name(&self) -> &str {
        "headless"
    }

    fn screen_size(&self) -> Size {
        self.screen
    }

    fn create_window(&self, rect: Rect, title: &str) -> WidgetId {
        self.insert(WidgetKind::Window, rect, title)
    }

    fn create_button(&self, rect: Rect, label: &str) -> WidgetId {
        self.insert(WidgetKind::Button, rect, label)
    }

    fn create_box(&self, box_type: BoxType, rect: Rect, label: &str) -> WidgetId {
        self.insert(WidgetKind::Box(box_type), rect, label)
    }

    fn create_table(&self, rect: Rect) -> KitResult<Box<dyn HostTable>> {
        if !self.tables_enabled {
            return Err(KitError::Unsupported(
                "table widget in headless backend".to_string(),
            ));
        }
        let table = HeadlessTable::new(rect);
        self.state.borrow_mut().tables.push(table.clone());
        Ok(Box::new(table))
    }

    fn add_child(&self, parent: WidgetId, child: WidgetId) {
        let mut state = self.state.borrow_mut();
        match state.widgets.get(&parent) {
            Some(entry) if entry.record.kind == WidgetKind::Window => {}
            Some(_) => {
                crate::log!("headless: {:?} is not a group", parent);
                return;
            }
            None => {
                crate::log!("headless: add_child with unknown parent {:?}", parent);
                return;
            }
        }
        let previous = match state.widgets.get(&child) {
            Some(entry) => entry.record.parent,
            None => {
                crate::log!("headless: add_child with unknown child {:?}", child);
                return;
            }
        };

        // A widget lives in at most one group
        if let Some(old) = previous.filter(|old| *old != parent) {
            if let Some(entry) = state.widgets.get_mut(&old) {
                entry.record.children.retain(|c| *c != child);
            }
        }
        if let Some(entry) = state.widgets.get_mut(&parent) {
            if !entry.record.children.contains(&child) {
                entry.record.children.push(child);
            }
        }
        if let Some(entry) = state.widgets.get_mut(&child) {
            entry.record.parent = Some(parent);
        }
    }

    fn remove_child(&self, parent: WidgetId, child: WidgetId) {
        let mut state = self.state.borrow_mut();
        if let Some(entry) = state.widgets.get_mut(&parent) {
            entry.record.children.retain(|c| *c != child);
        }
        if let Some(entry) = state.widgets.get_mut(&child) {
            if entry.record.parent == Some(parent) {
                entry.record.parent = None;
            }
        }
    }

    fn set_label(&self, id: WidgetId, label: &str) {
        self.update(id, |entry| entry.record.label = label.to_string());
    }

    fn set_label_size(&self, id: WidgetId, px: i32) {
        self.update(id, |entry| entry.record.label_size = Some(px));
    }

    fn set_label_color(&self, id: WidgetId, color: Color) {
        self.update(id, |entry| entry.record.label_color = Some(color));
    }

    fn set_color(&self, id: WidgetId, color: Color) {
        self.update(id, |entry| entry.record.color = Some(color));
    }

    fn set_callback(&self, id: WidgetId, callback: WidgetCallback) {
        self.update(id, |entry| {
            entry.callback = Some(Rc::new(RefCell::new(callback)));
            entry.record.has_callback = true;
        });
    }

    fn show(&self, id: WidgetId) {
        self.update(id, |entry| entry.record.visible = true);
    }

    fn system_color(&self, color: SystemColor) -> Color {
        self.colors
            .get(&color)
            .copied()
            .unwrap_or_else(|| color.default_color())
    }

    fn run(&self) -> KitResult<()> {
        self.state.borrow_mut().run_count += 1;
        crate::log!("headless: event loop entered and left immediately");
        Ok(())
    }
}

#[derive(Default)]
struct TableState {
    rect: Rect,
    rows: i32,
    row_notifications: Vec<i32>,
    redraws: usize,
    draw_handler: Option<Rc<RefCell<DrawCellHandler>>>,
    event_handler: Option<Rc<RefCell<RowEventHandler>>>,
}

/// In-memory host table; clones share state
#[derive(Clone, Default)]
pub struct HeadlessTable {
    state: Rc<RefCell<TableState>>,
}

impl HeadlessTable {
    pub fn new(rect: Rect) -> Self {
        Self {
            state: Rc::new(RefCell::new(TableState {
                rect,
                ..Default::default()
            })),
        }
    }

    /// Last row count received
    pub fn rows(&self) -> i32 {
        self.state.borrow().rows
    }

    /// Every row count received, in order
    pub fn row_notifications(&self) -> Vec<i32> {
        self.state.borrow().row_notifications.clone()
    }

    pub fn redraw_count(&self) -> usize {
        self.state.borrow().redraws
    }

    pub fn rect(&self) -> Rect {
        self.state.borrow().rect
    }

    /// Deliver a draw notification for one row.
    ///
    /// Returns false when no draw handler is installed.
    pub fn draw_row(&self, row: i32, rect: Rect) -> bool {
        let handler = self.state.borrow().draw_handler.clone();
        match handler {
            Some(handler) => {
                let mut handler = handler.borrow_mut();
                (*handler)(row, rect);
                true
            }
            None => false,
        }
    }

    /// Draw every row that fits in the table's height, top to bottom
    pub fn draw_visible(&self, row_height: i32) -> usize {
        let (rect, rows) = {
            let state = self.state.borrow();
            (state.rect, state.rows)
        };
        if row_height <= 0 {
            return 0;
        }

        let fit = (rect.height + row_height - 1) / row_height;
        let count = rows.min(fit).max(0);
        for row in 0..count {
            let row_rect = Rect::new(rect.x, rect.y + row * row_height, rect.width, row_height);
            self.draw_row(row, row_rect);
        }
        count as usize
    }

    /// Deliver an interaction on a row; returns the handler's verdict
    pub fn click_row(&self, row: i32) -> bool {
        let handler = self.state.borrow().event_handler.clone();
        match handler {
            Some(handler) => {
                let mut handler = handler.borrow_mut();
                (*handler)(row)
            }
            None => false,
        }
    }
}

impl HostTable for HeadlessTable {
    fn set_rows(&mut self, rows: i32) {
        let mut state = self.state.borrow_mut();
        state.rows = rows;
        state.row_notifications.push(rows);
    }

    fn redraw(&mut self) {
        self.state.borrow_mut().redraws += 1;
    }

    fn set_draw_cell_handler(&mut self, handler: DrawCellHandler) {
        self.state.borrow_mut().draw_handler = Some(Rc::new(RefCell::new(handler)));
    }

    fn set_event_handler(&mut self, handler: RowEventHandler) {
        self.state.borrow_mut().event_handler = Some(Rc::new(RefCell::new(handler)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_headless_records_widgets() {
        let tk = HeadlessToolkit::new();
        let win = tk.create_window(Rect::new(0, 0, 300, 200), "main");
        let btn = tk.create_button(Rect::new(10, 10, 80, 30), "ok");

        tk.add_child(win, btn);
        tk.set_color(btn, Color::rgb(1, 2, 3));
        tk.show(win);

        let win_rec = tk.widget(win).unwrap();
        assert_eq!(win_rec.kind, WidgetKind::Window);
        assert_eq!(win_rec.children, vec![btn]);
        assert!(win_rec.visible);

        let btn_rec = tk.widget(btn).unwrap();
        assert_eq!(btn_rec.parent, Some(win));
        assert_eq!(btn_rec.color, Some(Color::rgb(1, 2, 3)));
        assert_eq!(tk.widget_count(), 2);
    }

    #[test]
    fn test_headless_reparenting_moves_child() {
        let tk = HeadlessToolkit::new();
        let a = tk.create_window(Rect::zero(), "a");
        let b = tk.create_window(Rect::zero(), "b");
        let label = tk.create_box(BoxType::NoBox, Rect::zero(), "x");

        tk.add_child(a, label);
        tk.add_child(b, label);

        assert!(tk.widget(a).unwrap().children.is_empty());
        assert_eq!(tk.widget(b).unwrap().children, vec![label]);
        assert_eq!(tk.widget(label).unwrap().parent, Some(b));
    }

    #[test]
    fn test_headless_add_child_to_non_group_is_ignored() {
        let tk = HeadlessToolkit::new();
        let btn = tk.create_button(Rect::zero(), "b");
        let label = tk.create_box(BoxType::NoBox, Rect::zero(), "l");

        tk.add_child(btn, label);

        assert!(tk.widget(btn).unwrap().children.is_empty());
        assert_eq!(tk.widget(label).unwrap().parent, None);
    }

    #[test]
    fn test_headless_click_fires_callback() {
        let tk = Rc::new(HeadlessToolkit::new());
        let btn = tk.create_button(Rect::zero(), "b");
        assert!(!tk.click(btn));

        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let inner = tk.clone();
        tk.set_callback(
            btn,
            Box::new(move || {
                counter.set(counter.get() + 1);
                // Re-entrant toolkit call from inside a callback
                inner.set_label(btn, "clicked");
            }),
        );

        assert!(tk.click(btn));
        assert_eq!(hits.get(), 1);
        assert_eq!(tk.widget(btn).unwrap().label, "clicked");
    }

    #[test]
    fn test_headless_click_from_own_callback_is_skipped() {
        let tk = Rc::new(HeadlessToolkit::new());
        let btn = tk.create_button(Rect::zero(), "b");
        let nested = Rc::new(Cell::new(None));
        let result = nested.clone();
        let inner = tk.clone();
        tk.set_callback(
            btn,
            Box::new(move || {
                result.set(Some(inner.click(btn)));
            }),
        );

        assert!(tk.click(btn));
        assert_eq!(nested.get(), Some(false));
    }

    #[test]
    fn test_headless_tables_can_be_disabled() {
        let tk = HeadlessToolkit::new().without_tables();
        let result = tk.create_table(Rect::zero());
        assert!(matches!(result, Err(KitError::Unsupported(_))));
    }

    #[test]
    fn test_headless_table_draw_visible() {
        let mut table = HeadlessTable::new(Rect::new(0, 0, 100, 50));
        let drawn = Rc::new(RefCell::new(Vec::new()));
        let sink = drawn.clone();
        table.set_draw_cell_handler(Box::new(move |row, rect| {
            sink.borrow_mut().push((row, rect.y));
        }));

        table.set_rows(10);
        // 50px tall at 24px per row: rows 0, 1 and a partial row 2
        assert_eq!(table.draw_visible(24), 3);
        assert_eq!(*drawn.borrow(), vec![(0, 0), (1, 24), (2, 48)]);
    }

    #[test]
    fn test_headless_system_color_override() {
        let tk = HeadlessToolkit::new()
            .with_system_color(SystemColor::Selection, Color::rgb(9, 9, 9));
        assert_eq!(tk.system_color(SystemColor::Selection), Color::rgb(9, 9, 9));
        assert_eq!(tk.system_color(SystemColor::Red), Color::rgb(255, 0, 0));
    }
}
