//! TableView - a virtualized row list with cell reuse
//!
//! The host table owns drawing and input. It asks the view for rows as they
//! scroll into sight (`on_draw_cell`) and reports clicks (`on_row_event`).
//! Only rows drawn since the last reload hold a cell; `reload_data` returns
//! every bound cell to its pool so the data source can dequeue it again.

pub mod cell;
pub mod data_source;
pub mod pool;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::bridge::{HostTable, ToolkitHandle};
use crate::config::KitConfig;
use crate::error::KitResult;
use crate::foundation::Rect;

pub use cell::{CellRef, TableViewCell};
pub use data_source::{DataSource, Delegate};
pub use pool::ReusePool;

/// Row height used until one is configured
pub const DEFAULT_ROW_HEIGHT: i32 = 24;

/// Shared handle returned by [`TableView::create`]; the host table's
/// handlers hold a weak reference to the same view
pub type SharedTableView = Rc<RefCell<TableView>>;

/// Recycling list view
pub struct TableView {
    host: Box<dyn HostTable>,
    pool: ReusePool,
    visible: BTreeMap<i32, CellRef>,
    default_row_height: i32,
    data_source: Option<Rc<RefCell<dyn DataSource>>>,
    delegate: Option<Rc<RefCell<dyn Delegate>>>,
}

impl TableView {
    /// Wrap an existing host table. Handlers are not installed; use
    /// [`TableView::bind`] or forward notifications manually.
    pub fn new(host: Box<dyn HostTable>) -> Self {
        Self {
            host,
            pool: ReusePool::new(),
            visible: BTreeMap::new(),
            default_row_height: DEFAULT_ROW_HEIGHT,
            data_source: None,
            delegate: None,
        }
    }

    /// Ask the toolkit for a host table and bind it to a new view.
    ///
    /// Fails with `KitError::Unsupported` when the build cannot create tables.
    pub fn create(toolkit: &ToolkitHandle, rect: Rect) -> KitResult<SharedTableView> {
        Self::create_with_config(toolkit, rect, &KitConfig::default())
    }

    /// Like [`TableView::create`], taking the default row height from `config`
    pub fn create_with_config(
        toolkit: &ToolkitHandle,
        rect: Rect,
        config: &KitConfig,
    ) -> KitResult<SharedTableView> {
        let host = toolkit.create_table(rect).inspect_err(|e| {
            crate::log!("TableView: host table unavailable: {}", e);
        })?;

        let mut view = Self::new(host);
        view.set_default_row_height(config.default_row_height);

        let view = Rc::new(RefCell::new(view));
        Self::bind(&view);
        Ok(view)
    }

    /// Route the host table's draw and event notifications to `view`
    pub fn bind(view: &SharedTableView) {
        let weak = Rc::downgrade(view);
        let draw_target = weak.clone();
        let event_target = weak;

        let mut this = view.borrow_mut();
        this.host.set_draw_cell_handler(Box::new(move |row, rect| {
            with_view(&draw_target, |view| {
                view.on_draw_cell(row, rect);
            });
        }));
        this.host.set_event_handler(Box::new(move |row| {
            with_view(&event_target, |view| view.on_row_event(row)).unwrap_or(false)
        }));
    }

    pub fn set_data_source(&mut self, source: Rc<RefCell<dyn DataSource>>) {
        self.data_source = Some(source);
    }

    pub fn clear_data_source(&mut self) {
        self.data_source = None;
    }

    pub fn set_delegate(&mut self, delegate: Rc<RefCell<dyn Delegate>>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Set the fallback row height; non-positive values are ignored
    pub fn set_default_row_height(&mut self, height: i32) {
        if height > 0 {
            self.default_row_height = height;
        }
    }

    pub fn default_row_height(&self) -> i32 {
        self.default_row_height
    }

    /// Height of `row`: the delegate's answer, or the default when it has
    /// none
    pub fn row_height(&self, row: i32) -> i32 {
        let custom = self
            .delegate
            .as_ref()
            .and_then(|delegate| delegate.try_borrow().ok().map(|d| d.row_height(row)))
            .unwrap_or(0);
        if custom > 0 {
            custom
        } else {
            self.default_row_height
        }
    }

    /// Take a free cell of `reuse_id` or build a new one
    pub fn dequeue(&mut self, reuse_id: &str) -> CellRef {
        self.pool.dequeue(reuse_id)
    }

    /// Return a cell to its pool
    pub fn enqueue(&mut self, cell: Option<CellRef>) {
        self.pool.enqueue(cell);
    }

    /// Recycle every bound cell and tell the host the new row count
    pub fn reload_data(&mut self) {
        let Some(source) = self.data_source.clone() else {
            self.host.set_rows(0);
            self.host.redraw();
            return;
        };

        let recycled = self.visible.len();
        for cell in std::mem::take(&mut self.visible).into_values() {
            self.pool.enqueue(Some(cell));
        }

        let rows = match source.try_borrow_mut() {
            Ok(mut source) => source.number_of_rows().max(0),
            Err(_) => {
                crate::log!("TableView: data source busy during reload");
                0
            }
        };
        crate::log!("TableView: reload rows={} recycled={}", rows, recycled);

        self.host.set_rows(rows);
        self.host.redraw();
    }

    /// Host notification that `row` is about to be drawn at `rect`.
    ///
    /// Returns the cell bound to the row, if any.
    pub fn on_draw_cell(&mut self, row: i32, _rect: Rect) -> Option<CellRef> {
        let source = self.data_source.clone()?;
        if let Some(cell) = self.visible.get(&row) {
            return Some(cell.clone());
        }

        let cell = match source.try_borrow_mut() {
            Ok(mut source) => source.cell_for_row(&mut self.pool, row)?,
            Err(_) => {
                crate::log!("TableView: data source busy, skipping row {}", row);
                return None;
            }
        };

        // A cell is either pooled or bound, never both
        if self.pool.remove(&cell) {
            crate::log!("TableView: row {} reclaimed a pooled cell", row);
        }

        let previous = std::mem::replace(&mut cell.borrow_mut().row, row);
        // A cell is bound to one row at a time
        if previous != row
            && self
                .visible
                .get(&previous)
                .is_some_and(|bound| Rc::ptr_eq(bound, &cell))
        {
            self.visible.remove(&previous);
        }
        self.visible.insert(row, cell.clone());
        Some(cell)
    }

    /// Host notification of an interaction on `row`; true when handled
    pub fn on_row_event(&mut self, row: i32) -> bool {
        if row < 0 {
            return false;
        }
        let Some(delegate) = &self.delegate else {
            return false;
        };
        match delegate.try_borrow_mut() {
            Ok(mut delegate) => {
                delegate.did_select_row(row);
                true
            }
            Err(_) => {
                crate::log!("TableView: delegate busy, dropping event for row {}", row);
                false
            }
        }
    }

    /// Cell bound to `row` since the last reload
    pub fn visible_cell(&self, row: i32) -> Option<CellRef> {
        self.visible.get(&row).cloned()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Free cells of one reuse category
    pub fn pooled_count(&self, reuse_id: &str) -> usize {
        self.pool.pooled_count(reuse_id)
    }
}

/// Run `f` against the view behind `weak` unless it is gone or already
/// borrowed (a notification raised while the view itself is calling the host)
fn with_view<R>(weak: &Weak<RefCell<TableView>>, f: impl FnOnce(&mut TableView) -> R) -> Option<R> {
    let view = weak.upgrade()?;
    let mut view = view.try_borrow_mut().ok()?;
    Some(f(&mut view))
}
