pub mod bridge;
pub mod catalog;
pub mod clickable;
pub mod memory;
pub mod resolver;
pub mod tree;
pub mod widget;
pub mod windows;

pub use catalog::{CATALOG, WidgetCatalog};
pub use clickable::{Button, Clickable, TextField};
pub use resolver::Desktop;
pub use tree::{AccessibilityTree, MouseButton, NodeFilter, NodeId, NodeState};
pub use widget::{Widget, WidgetSpec};
pub use windows::{PasswordWindow, login_via_popup};
