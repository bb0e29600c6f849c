//! UIView - the base view every uikit widget carries

use std::rc::Rc;

use crate::bridge::RawWidget;

/// Anything that can hold child widgets (windows, groups)
pub trait Container {
    /// Append a child widget
    fn add(&self, child: &RawWidget);

    /// Detach a child widget
    fn remove(&self, child: &RawWidget);
}

impl Container for RawWidget {
    fn add(&self, child: &RawWidget) {
        self.toolkit().add_child(self.id(), child.id());
    }

    fn remove(&self, child: &RawWidget) {
        self.toolkit().remove_child(self.id(), child.id());
    }
}

/// Objects that expose a [`UIView`]
pub trait Viewable {
    fn view(&self) -> &UIView;
}

/// Base view: an optional native widget plus an optional host container.
///
/// A window's root view has a host but no widget of its own; a button's
/// view has a widget but no host until something adopts it.
#[derive(Clone, Default)]
pub struct UIView {
    raw: Option<RawWidget>,
    host: Option<Rc<dyn Container>>,
}

impl UIView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the container that subviews are added to
    pub fn bind_host(&mut self, host: Rc<dyn Container>) {
        self.host = Some(host);
    }

    /// Bind the native widget backing this view
    pub fn bind_raw(&mut self, raw: RawWidget) {
        self.raw = Some(raw);
    }

    pub fn raw(&self) -> Option<&RawWidget> {
        self.raw.as_ref()
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// Add a child's widget to this view's host.
    ///
    /// No-op when this view has no host or the child has no widget.
    pub fn add_subview(&self, child: &dyn Viewable) {
        let (Some(host), Some(raw)) = (&self.host, child.view().raw()) else {
            return;
        };
        host.add(raw);
    }

    /// Remove a child's widget from this view's host
    pub fn remove_subview(&self, child: &dyn Viewable) {
        let (Some(host), Some(raw)) = (&self.host, child.view().raw()) else {
            return;
        };
        host.remove(raw);
    }
}

impl Viewable for UIView {
    fn view(&self) -> &UIView {
        self
    }
}

impl std::fmt::Debug for UIView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UIView")
            .field("raw", &self.raw)
            .field("has_host", &self.host.is_some())
            .finish()
    }
}
