use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::desktop::tree::{AccessibilityTree, MouseButton, NodeFilter, NodeId, NodeState};
use crate::error::{OtoError, OtoResult};

/// One node of a tree fixture, with its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_true")]
    pub showing: bool,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_true() -> bool {
    true
}

impl NodeSpec {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        NodeSpec {
            name: name.into(),
            role: role.into(),
            description: String::new(),
            label: String::new(),
            showing: true,
            focused: false,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.showing = false;
        self
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// YAML fixture: a list of applications, each the root of a subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFixture {
    #[serde(default)]
    pub applications: Vec<NodeSpec>,
}

/// Something done to a node through the action primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    Blink(NodeId),
    Click(NodeId, MouseButton),
    DoubleClick(NodeId, MouseButton),
    GrabFocus(NodeId),
    SetText(NodeId, String),
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    role: String,
    description: String,
    label: String,
    showing: bool,
    focused: bool,
    text: String,
    app: usize,
    parent: Option<usize>,
    children: Vec<usize>,
    attached: bool,
}

/// Accessibility tree held in memory.
///
/// Used for offline probing against a recorded fixture and as the tree in
/// tests. Actions mutate node state and are recorded as [`TreeEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTree {
    nodes: Vec<Node>,
    applications: Vec<usize>,
    events: Vec<TreeEvent>,
}

impl InMemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: TreeFixture) -> Self {
        let mut tree = InMemoryTree::new();
        for app in fixture.applications {
            tree.add_application(app);
        }
        tree
    }

    pub fn from_yaml(yaml: &str) -> OtoResult<Self> {
        let fixture: TreeFixture = serde_yaml::from_str(yaml)
            .map_err(|e| OtoError::Config(format!("invalid tree fixture: {}", e)))?;
        Ok(Self::from_fixture(fixture))
    }

    pub fn load(path: impl AsRef<Path>) -> OtoResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            OtoError::Config(format!("could not read tree fixture {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Add an application subtree and return its root.
    pub fn add_application(&mut self, app: NodeSpec) -> NodeId {
        let index = self.nodes.len();
        self.insert(app, index, None);
        self.applications.push(index);
        NodeId(index as u64)
    }

    /// Add a subtree under `parent` and return its root.
    pub fn add_node(&mut self, parent: NodeId, spec: NodeSpec) -> OtoResult<NodeId> {
        let parent_index = self.index(parent)?;
        let app = self.nodes[parent_index].app;
        let index = self.insert(spec, app, Some(parent_index));
        self.nodes[parent_index].children.push(index);
        Ok(NodeId(index as u64))
    }

    /// Detach a node and its subtree. Handles to them go stale.
    pub fn remove(&mut self, node: NodeId) -> OtoResult<()> {
        let index = self.index(node)?;
        if let Some(parent) = self.nodes[index].parent {
            self.nodes[parent].children.retain(|&child| child != index);
        }
        self.applications.retain(|&app| app != index);
        for detached in self.subtree(index) {
            self.nodes[detached].attached = false;
        }
        self.nodes[index].attached = false;
        Ok(())
    }

    pub fn set_showing(&mut self, node: NodeId, showing: bool) -> OtoResult<()> {
        let index = self.index(node)?;
        self.nodes[index].showing = showing;
        Ok(())
    }

    /// Current text of a node, without recording an event.
    pub fn text_of(&self, node: NodeId) -> OtoResult<&str> {
        let index = self.index(node)?;
        Ok(&self.nodes[index].text)
    }

    pub fn name_of(&self, node: NodeId) -> OtoResult<&str> {
        let index = self.index(node)?;
        Ok(&self.nodes[index].name)
    }

    pub fn role_of(&self, node: NodeId) -> OtoResult<&str> {
        let index = self.index(node)?;
        Ok(&self.nodes[index].role)
    }

    pub fn events(&self) -> &[TreeEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn insert(&mut self, spec: NodeSpec, app: usize, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            name: spec.name,
            role: spec.role,
            description: spec.description,
            label: spec.label,
            showing: spec.showing,
            focused: spec.focused,
            text: spec.text,
            app,
            parent,
            children: Vec::new(),
            attached: true,
        });
        for child in spec.children {
            let child_index = self.insert(child, app, Some(index));
            self.nodes[index].children.push(child_index);
        }
        index
    }

    fn index(&self, node: NodeId) -> OtoResult<usize> {
        let index = node.0 as usize;
        match self.nodes.get(index) {
            Some(n) if n.attached => Ok(index),
            _ => Err(OtoError::StaleNode(node.0)),
        }
    }

    /// Descendants of `index` in depth-first pre-order.
    fn subtree(&self, index: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[index].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next].children.iter().rev());
        }
        out
    }

    fn matching(
        &self,
        parent: NodeId,
        filter: &NodeFilter,
    ) -> OtoResult<impl Iterator<Item = usize> + '_> {
        let index = self.index(parent)?;
        let filter = filter.clone();
        Ok(self.subtree(index).into_iter().filter(move |&i| {
            let n = &self.nodes[i];
            filter.matches(&n.name, &n.role, &n.description, &n.label)
        }))
    }
}

impl AccessibilityTree for InMemoryTree {
    fn application(&mut self, name: &str) -> OtoResult<NodeId> {
        self.applications
            .iter()
            .find(|&&app| self.nodes[app].name == name)
            .map(|&app| NodeId(app as u64))
            .ok_or_else(|| OtoError::NotFound {
                role: "application".into(),
                name: name.into(),
            })
    }

    fn find_child(&mut self, parent: NodeId, filter: &NodeFilter) -> OtoResult<Option<NodeId>> {
        Ok(self
            .matching(parent, filter)?
            .next()
            .map(|i| NodeId(i as u64)))
    }

    fn find_all(&mut self, parent: NodeId, filter: &NodeFilter) -> OtoResult<Vec<NodeId>> {
        Ok(self
            .matching(parent, filter)?
            .map(|i| NodeId(i as u64))
            .collect())
    }

    fn children(&mut self, node: NodeId, recursive: bool) -> OtoResult<Vec<NodeId>> {
        let index = self.index(node)?;
        let children = if recursive {
            self.subtree(index)
        } else {
            self.nodes[index].children.clone()
        };
        Ok(children.into_iter().map(|i| NodeId(i as u64)).collect())
    }

    fn state(&mut self, node: NodeId) -> OtoResult<NodeState> {
        let n = &self.nodes[self.index(node)?];
        Ok(NodeState {
            showing: n.showing,
            focused: n.focused,
        })
    }

    fn grab_focus(&mut self, node: NodeId) -> OtoResult<()> {
        let index = self.index(node)?;
        let app = self.nodes[index].app;
        for n in self.nodes.iter_mut().filter(|n| n.app == app) {
            n.focused = false;
        }
        self.nodes[index].focused = true;
        self.events.push(TreeEvent::GrabFocus(node));
        Ok(())
    }

    fn blink(&mut self, node: NodeId) -> OtoResult<()> {
        self.index(node)?;
        self.events.push(TreeEvent::Blink(node));
        Ok(())
    }

    fn click(&mut self, node: NodeId, button: MouseButton) -> OtoResult<()> {
        self.index(node)?;
        self.events.push(TreeEvent::Click(node, button));
        Ok(())
    }

    fn double_click(&mut self, node: NodeId, button: MouseButton) -> OtoResult<()> {
        self.index(node)?;
        self.events.push(TreeEvent::DoubleClick(node, button));
        Ok(())
    }

    fn text(&mut self, node: NodeId) -> OtoResult<String> {
        let index = self.index(node)?;
        Ok(self.nodes[index].text.clone())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> OtoResult<()> {
        let index = self.index(node)?;
        self.nodes[index].text = text.to_string();
        self.events.push(TreeEvent::SetText(node, text.to_string()));
        Ok(())
    }
}
