#![allow(dead_code)]

use oto::desktop::memory::{InMemoryTree, NodeSpec, TreeFixture};
use oto::desktop::{AccessibilityTree, NodeFilter, NodeId};

/// Firefox with a "Login" dialog holding two unlabelled entries and an OK button.
pub fn login_dialog_tree() -> InMemoryTree {
    InMemoryTree::from_fixture(TreeFixture {
        applications: vec![
            NodeSpec::new("Firefox", "application").child(
                NodeSpec::new("Mozilla Firefox", "frame").child(
                    NodeSpec::new("Login", "dialog")
                        .child(NodeSpec::new("", "entry").text("first"))
                        .child(NodeSpec::new("", "entry").text("second"))
                        .child(NodeSpec::new("OK", "push button")),
                ),
            ),
        ],
    })
}

/// Firefox showing the HTTP "Authentication Required" popup.
pub fn auth_popup_tree() -> InMemoryTree {
    InMemoryTree::from_fixture(TreeFixture {
        applications: vec![
            NodeSpec::new("Firefox", "application").child(
                NodeSpec::new("Authentication Required", "dialog")
                    .child(NodeSpec::new("", "entry"))
                    .child(NodeSpec::new("", "password text"))
                    .child(NodeSpec::new("Cancel", "push button"))
                    .child(NodeSpec::new("OK", "push button")),
            ),
        ],
    })
}

/// Firefox with no popup at all.
pub fn bare_firefox_tree() -> InMemoryTree {
    InMemoryTree::from_fixture(TreeFixture {
        applications: vec![
            NodeSpec::new("Firefox", "application")
                .child(NodeSpec::new("Mozilla Firefox", "frame")),
        ],
    })
}

pub fn role(role: &str) -> NodeFilter {
    NodeFilter {
        role: role.into(),
        ..NodeFilter::default()
    }
}

/// Every node with the given role under the Firefox application.
pub fn nodes_with_role(tree: &mut InMemoryTree, wanted: &str) -> Vec<NodeId> {
    let app = tree.application("Firefox").expect("Firefox application");
    tree.find_all(app, &role(wanted)).expect("find_all")
}
