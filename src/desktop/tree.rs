use serde::{Deserialize, Serialize};

use crate::error::OtoResult;

/// Handle to a live node, valid only for the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// Attribute filter for tree queries. Empty fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFilter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub label: String,
}

impl NodeFilter {
    pub fn matches(&self, name: &str, role: &str, description: &str, label: &str) -> bool {
        field_matches(&self.name, name)
            && field_matches(&self.role, role)
            && field_matches(&self.description, description)
            && field_matches(&self.label, label)
    }

    pub fn is_wildcard(&self) -> bool {
        self.name.is_empty()
            && self.role.is_empty()
            && self.description.is_empty()
            && self.label.is_empty()
    }
}

fn field_matches(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted == actual
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeState {
    pub showing: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

impl MouseButton {
    /// X11-style button number.
    pub fn number(self) -> u8 {
        match self {
            MouseButton::Primary => 1,
            MouseButton::Middle => 2,
            MouseButton::Secondary => 3,
        }
    }
}

/// Query and action primitives of an accessibility-tree service.
///
/// Searches walk the subtree below the given node in depth-first pre-order,
/// and `find_child` returns the first match in that order.
pub trait AccessibilityTree {
    /// Root node of the named application.
    fn application(&mut self, name: &str) -> OtoResult<NodeId>;

    /// First descendant of `parent` matching `filter`.
    fn find_child(&mut self, parent: NodeId, filter: &NodeFilter) -> OtoResult<Option<NodeId>>;

    /// Every descendant of `parent` matching `filter`.
    fn find_all(&mut self, parent: NodeId, filter: &NodeFilter) -> OtoResult<Vec<NodeId>>;

    /// Children of `node`, or all descendants when `recursive`.
    fn children(&mut self, node: NodeId, recursive: bool) -> OtoResult<Vec<NodeId>>;

    fn state(&mut self, node: NodeId) -> OtoResult<NodeState>;

    fn grab_focus(&mut self, node: NodeId) -> OtoResult<()>;

    /// Briefly highlight the node on screen.
    fn blink(&mut self, node: NodeId) -> OtoResult<()>;

    fn click(&mut self, node: NodeId, button: MouseButton) -> OtoResult<()>;

    fn double_click(&mut self, node: NodeId, button: MouseButton) -> OtoResult<()>;

    fn text(&mut self, node: NodeId) -> OtoResult<String>;

    fn set_text(&mut self, node: NodeId, text: &str) -> OtoResult<()>;
}
