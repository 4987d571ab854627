use tracing::{debug, info};

use crate::desktop::resolver::Desktop;
use crate::desktop::tree::{NodeFilter, NodeId, NodeState};
use crate::error::{OtoError, OtoResult};

/// Identifying attributes of a desktop widget plus the catalog name of its
/// parent widget. No parent means the application root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetSpec {
    pub filter: NodeFilter,
    pub parent: Option<String>,
}

impl WidgetSpec {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        WidgetSpec {
            filter: NodeFilter {
                name: name.into(),
                role: role.into(),
                ..NodeFilter::default()
            },
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.filter.description = description.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.filter.label = label.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.filter.name
    }

    pub fn role(&self) -> &str {
        &self.filter.role
    }

    pub(crate) fn not_found(&self) -> OtoError {
        OtoError::NotFound {
            role: self.filter.role.clone(),
            name: self.filter.name.clone(),
        }
    }
}

/// A desktop UI element that can be looked up in the live accessibility tree.
pub trait Widget {
    fn spec(&self) -> &WidgetSpec;

    /// Live node this widget is searched under.
    fn get_parent_node(&self, desktop: &mut Desktop<'_>) -> OtoResult<NodeId> {
        desktop.resolve_parent(self.spec())
    }

    /// Pick this widget's node among the descendants of `parent`.
    fn locate_under(&self, desktop: &mut Desktop<'_>, parent: NodeId) -> OtoResult<NodeId> {
        desktop.locate(parent, self.spec())
    }

    /// The single live node matching this widget.
    fn get_instance(&self, desktop: &mut Desktop<'_>) -> OtoResult<NodeId> {
        let parent = self.get_parent_node(desktop)?;
        self.locate_under(desktop, parent)
    }

    /// Every live node under the parent matching this widget, in tree order.
    fn get_all_instances(&self, desktop: &mut Desktop<'_>) -> OtoResult<Vec<NodeId>> {
        let parent = self.get_parent_node(desktop)?;
        desktop.tree().find_all(parent, &self.spec().filter)
    }

    /// Every node beneath this widget's own live node.
    fn get_all_children(&self, desktop: &mut Desktop<'_>) -> OtoResult<Vec<NodeId>> {
        let node = self.get_instance(desktop)?;
        desktop.tree().children(node, true)
    }

    fn focus(&self, desktop: &mut Desktop<'_>) -> OtoResult<()> {
        let spec = self.spec();
        info!("Focusing on {}: {}", spec.role(), spec.name());
        let node = self.get_instance(desktop)?;
        desktop.tree().grab_focus(node)
    }

    /// Whether the widget exists and is showing. Absence is `false`.
    fn is_showing(&self, desktop: &mut Desktop<'_>) -> OtoResult<bool> {
        debug!("Checking if widget is showing: {}", self.spec().name());
        liveness(self, desktop, "showing", |state| state.showing)
    }

    /// Whether the widget exists and has focus. Absence is `false`.
    fn is_focused(&self, desktop: &mut Desktop<'_>) -> OtoResult<bool> {
        debug!("Checking if widget is focused: {}", self.spec().name());
        liveness(self, desktop, "focused", |state| state.focused)
    }
}

impl Widget for WidgetSpec {
    fn spec(&self) -> &WidgetSpec {
        self
    }
}

fn liveness<W: Widget + ?Sized>(
    widget: &W,
    desktop: &mut Desktop<'_>,
    what: &str,
    pick: fn(NodeState) -> bool,
) -> OtoResult<bool> {
    let name = widget.spec().name();
    match widget.get_instance(desktop) {
        Ok(node) => {
            let value = pick(desktop.tree().state(node)?);
            debug!("Widget '{}' {}? {}", name, what, value);
            Ok(value)
        }
        Err(e) if e.is_not_found() => {
            debug!("Widget '{}' not found", name);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
