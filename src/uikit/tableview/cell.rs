//! Reusable table rows

use std::cell::RefCell;
use std::rc::Rc;

use crate::colors::Color;

/// Shared handle to a cell; the pool, the visible-row map and the data
/// source may all hold one
pub type CellRef = Rc<RefCell<TableViewCell>>;

/// One reusable row record
#[derive(Clone, Debug, PartialEq)]
pub struct TableViewCell {
    reuse_id: String,
    /// Row this cell currently shows, -1 when unassigned
    pub row: i32,
    pub text: Option<String>,
    pub text_color: Option<Color>,
    pub background: Option<Color>,
    reuse_count: u32,
}

impl TableViewCell {
    pub fn new(reuse_id: impl Into<String>) -> Self {
        Self {
            reuse_id: reuse_id.into(),
            row: -1,
            text: None,
            text_color: None,
            background: None,
            reuse_count: 0,
        }
    }

    /// Create a cell already wrapped in a shared handle
    pub fn shared(reuse_id: impl Into<String>) -> CellRef {
        Rc::new(RefCell::new(Self::new(reuse_id)))
    }

    pub fn reuse_id(&self) -> &str {
        &self.reuse_id
    }

    /// How many times the cell was handed out again from a pool
    pub fn reuse_count(&self) -> u32 {
        self.reuse_count
    }

    /// Reset per-row state before the cell is handed out again
    pub fn prepare_for_reuse(&mut self) {
        self.row = -1;
        self.text = None;
        self.text_color = None;
        self.background = None;
        self.reuse_count += 1;
    }
}
