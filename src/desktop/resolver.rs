use tracing::{debug, trace};

use crate::desktop::catalog::{CATALOG, WidgetCatalog};
use crate::desktop::tree::{AccessibilityTree, NodeId};
use crate::desktop::widget::WidgetSpec;
use crate::error::{OtoError, OtoResult};

/// Application whose tree is searched when a widget has no parent.
pub const DEFAULT_APP_NAME: &str = "Firefox";

/// Everything a widget needs to resolve itself: the live tree, the catalog
/// its parent references point into, and the application under test.
///
/// Nothing is cached. Every resolution re-walks the parent chain against the
/// tree as it is at that moment.
pub struct Desktop<'a> {
    tree: &'a mut dyn AccessibilityTree,
    catalog: &'a WidgetCatalog,
    app_name: String,
}

impl<'a> Desktop<'a> {
    /// Desktop over the default widget catalog.
    pub fn new(tree: &'a mut dyn AccessibilityTree) -> Self {
        Self::with_catalog(tree, &CATALOG)
    }

    pub fn with_catalog(tree: &'a mut dyn AccessibilityTree, catalog: &'a WidgetCatalog) -> Self {
        Desktop {
            tree,
            catalog,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    pub fn application(&self) -> &str {
        &self.app_name
    }

    pub fn catalog(&self) -> &'a WidgetCatalog {
        self.catalog
    }

    pub fn tree(&mut self) -> &mut dyn AccessibilityTree {
        &mut *self.tree
    }

    /// Root node of the application under test.
    pub fn app_node(&mut self) -> OtoResult<NodeId> {
        self.tree.application(&self.app_name)
    }

    /// Live node this widget should be searched under.
    pub fn resolve_parent(&mut self, spec: &WidgetSpec) -> OtoResult<NodeId> {
        let mut visited = Vec::new();
        self.parent_node(spec, &mut visited)
    }

    fn parent_node(&mut self, spec: &WidgetSpec, visited: &mut Vec<String>) -> OtoResult<NodeId> {
        let Some(parent_name) = spec.parent.as_deref() else {
            return self.app_node();
        };

        let cyclic = visited.iter().any(|seen| seen == parent_name);
        visited.push(parent_name.to_string());
        if cyclic {
            return Err(OtoError::CyclicReference {
                chain: visited.clone(),
            });
        }

        let catalog = self.catalog;
        let parent = catalog
            .get(parent_name)
            .ok_or_else(|| OtoError::UnknownWidget(parent_name.to_string()))?;

        trace!("Resolving parent '{}'", parent_name);
        let grandparent = self.parent_node(parent.spec(), visited)?;
        parent.locate_under(self, grandparent)
    }

    /// First node under `parent` matching the widget's filter.
    pub fn locate(&mut self, parent: NodeId, spec: &WidgetSpec) -> OtoResult<NodeId> {
        let found = self.tree.find_child(parent, &spec.filter)?;
        debug!(
            "Lookup {} '{}' under node {}: {:?}",
            spec.role(),
            spec.name(),
            parent.0,
            found
        );
        found.ok_or_else(|| spec.not_found())
    }
}
