//! Toolkit binding seam
//!
//! Everything the uikit layer needs from the native GUI library goes through
//! [`Toolkit`]. Backends own their widgets and hand out [`WidgetId`]s; the
//! uikit wrappers hold a [`RawWidget`] (toolkit handle + id) and forward to it.
//!
//! All methods take `&self`: a backend's event loop calls user callbacks that
//! in turn call back into the toolkit, so implementations keep their state
//! behind interior mutability and must not hold a borrow across a callback.

pub mod headless;
pub mod system_color;

use std::fmt;
use std::rc::Rc;

use crate::colors::Color;
use crate::error::{KitError, KitResult};
use crate::foundation::{Rect, Size};

pub use headless::{HeadlessTable, HeadlessToolkit, WidgetKind, WidgetRecord};
pub use system_color::SystemColor;

/// Shared handle to a toolkit backend
pub type ToolkitHandle = Rc<dyn Toolkit>;

/// Widget callback (button press and similar)
pub type WidgetCallback = Box<dyn FnMut()>;

/// Host table draw notification: row index and the row's screen rectangle
pub type DrawCellHandler = Box<dyn FnMut(i32, Rect)>;

/// Host table event notification; returns true when the event was handled
pub type RowEventHandler = Box<dyn FnMut(i32) -> bool>;

/// Opaque identifier of a native widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

/// Box frame types used when creating plain boxes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxType {
    /// No frame or background; used for text labels
    #[default]
    NoBox,
    FlatBox,
    UpBox,
    DownBox,
    BorderBox,
}

/// Native GUI toolkit binding
pub trait Toolkit {
    /// Backend name for logging
    fn name(&self) -> &str;

    /// Size of the primary display
    fn screen_size(&self) -> Size;

    /// Create a top-level window (a group that can hold children)
    fn create_window(&self, rect: Rect, title: &str) -> WidgetId;

    /// Create a push button
    fn create_button(&self, rect: Rect, label: &str) -> WidgetId;

    /// Create a plain box, used for labels
    fn create_box(&self, box_type: BoxType, rect: Rect, label: &str) -> WidgetId;

    /// Create a virtualized row table
    fn create_table(&self, _rect: Rect) -> KitResult<Box<dyn HostTable>> {
        Err(KitError::Unsupported(format!(
            "table widget in {} backend",
            self.name()
        )))
    }

    /// Append `child` to the group `parent`
    fn add_child(&self, parent: WidgetId, child: WidgetId);

    /// Detach `child` from the group `parent`
    fn remove_child(&self, parent: WidgetId, child: WidgetId);

    fn set_label(&self, id: WidgetId, label: &str);

    fn set_label_size(&self, id: WidgetId, px: i32);

    fn set_label_color(&self, id: WidgetId, color: Color);

    fn set_color(&self, id: WidgetId, color: Color);

    /// Replace the widget's activation callback
    fn set_callback(&self, id: WidgetId, callback: WidgetCallback);

    fn show(&self, id: WidgetId);

    /// Resolve one of the toolkit's named colors
    fn system_color(&self, color: SystemColor) -> Color;

    /// Enter the event loop
    fn run(&self) -> KitResult<()>;
}

/// The toolkit's virtualized table widget, as seen by a table view
pub trait HostTable {
    /// Tell the surface how many rows exist
    fn set_rows(&mut self, rows: i32);

    /// Request a repaint
    fn redraw(&mut self);

    /// Install the per-row draw notification
    fn set_draw_cell_handler(&mut self, handler: DrawCellHandler);

    /// Install the per-row interaction notification
    fn set_event_handler(&mut self, handler: RowEventHandler);
}

/// A native widget together with the toolkit that owns it
#[derive(Clone)]
pub struct RawWidget {
    toolkit: ToolkitHandle,
    id: WidgetId,
}

impl RawWidget {
    pub fn new(toolkit: ToolkitHandle, id: WidgetId) -> Self {
        Self { toolkit, id }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn toolkit(&self) -> &ToolkitHandle {
        &self.toolkit
    }

    pub fn set_label(&self, label: &str) {
        self.toolkit.set_label(self.id, label);
    }

    pub fn set_label_size(&self, px: i32) {
        self.toolkit.set_label_size(self.id, px);
    }

    pub fn set_label_color(&self, color: Color) {
        self.toolkit.set_label_color(self.id, color);
    }

    pub fn set_color(&self, color: Color) {
        self.toolkit.set_color(self.id, color);
    }

    pub fn set_callback(&self, callback: impl FnMut() + 'static) {
        self.toolkit.set_callback(self.id, Box::new(callback));
    }

    pub fn show(&self) {
        self.toolkit.show(self.id);
    }
}

impl fmt::Debug for RawWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawWidget")
            .field("toolkit", &self.toolkit.name())
            .field("id", &self.id)
            .finish()
    }
}

impl PartialEq for RawWidget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.toolkit, &other.toolkit)
    }
}
