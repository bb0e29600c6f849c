//! Per-category pools of free cells

use std::collections::HashMap;
use std::rc::Rc;

use super::cell::{CellRef, TableViewCell};

/// Free cells grouped by reuse id; each group is a LIFO stack
#[derive(Debug, Default)]
pub struct ReusePool {
    pools: HashMap<String, Vec<CellRef>>,
}

impl ReusePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the most recently freed cell of `reuse_id`, or build a new one.
    ///
    /// A recycled cell has `prepare_for_reuse` called exactly once.
    pub fn dequeue(&mut self, reuse_id: &str) -> CellRef {
        match self.pools.get_mut(reuse_id).and_then(|stack| stack.pop()) {
            Some(cell) => {
                cell.borrow_mut().prepare_for_reuse();
                cell
            }
            None => TableViewCell::shared(reuse_id),
        }
    }

    /// Return a cell to its category's pool.
    ///
    /// Cells with an empty reuse id are dropped. The row is left as is until
    /// the cell is dequeued again.
    pub fn enqueue(&mut self, cell: Option<CellRef>) {
        let Some(cell) = cell else {
            return;
        };
        let reuse_id = cell.borrow().reuse_id().to_string();
        if reuse_id.is_empty() {
            return;
        }
        self.pools.entry(reuse_id).or_default().push(cell);
    }

    /// Take `cell` out of its pool if it is there; true when it was pooled
    pub fn remove(&mut self, cell: &CellRef) -> bool {
        let reuse_id = cell.borrow().reuse_id().to_string();
        let Some(stack) = self.pools.get_mut(&reuse_id) else {
            return false;
        };
        match stack.iter().position(|pooled| Rc::ptr_eq(pooled, cell)) {
            Some(index) => {
                stack.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of free cells of one category
    pub fn pooled_count(&self, reuse_id: &str) -> usize {
        self.pools.get(reuse_id).map_or(0, Vec::len)
    }

    /// Number of free cells across all categories
    pub fn total(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }
}
