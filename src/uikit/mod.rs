//! UIKit-style wrappers over the toolkit binding

pub mod button;
pub mod label;
pub mod screen;
pub mod tableview;
pub mod view;
pub mod window;

pub use button::UIButton;
pub use label::UILabel;
pub use screen::Screen;
pub use tableview::{
    CellRef, DataSource, Delegate, ReusePool, SharedTableView, TableView, TableViewCell,
};
pub use view::{Container, UIView, Viewable};
pub use window::UIWindow;
