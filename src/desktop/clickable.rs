use tracing::{debug, info};

use crate::desktop::resolver::Desktop;
use crate::desktop::tree::{MouseButton, NodeId};
use crate::desktop::widget::{Widget, WidgetSpec};
use crate::error::{OtoError, OtoResult};

pub const PUSH_BUTTON_ROLE: &str = "push button";

/// A widget that can be clicked. Each click blinks the widget first so a
/// person watching the run can follow along.
pub trait Clickable: Widget {
    fn click(&self, desktop: &mut Desktop<'_>, button: MouseButton) -> OtoResult<()> {
        let spec = self.spec();
        info!("Clicking {}: {}", spec.role(), spec.name());
        let node = self.get_instance(desktop)?;
        let tree = desktop.tree();
        tree.blink(node)?;
        tree.click(node, button)
    }

    fn double_click(&self, desktop: &mut Desktop<'_>, button: MouseButton) -> OtoResult<()> {
        let spec = self.spec();
        info!("Double-clicking {}: {}", spec.role(), spec.name());
        let node = self.get_instance(desktop)?;
        let tree = desktop.tree();
        tree.blink(node)?;
        tree.blink(node)?;
        tree.double_click(node, button)
    }
}

/// A push button, addressed by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    spec: WidgetSpec,
}

impl Button {
    pub fn new(name: impl Into<String>) -> Self {
        Button {
            spec: WidgetSpec::new(name, PUSH_BUTTON_ROLE),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.spec = self.spec.with_parent(parent);
        self
    }
}

impl Widget for Button {
    fn spec(&self) -> &WidgetSpec {
        &self.spec
    }
}

impl Clickable for Button {}

/// A text field, addressed by role and its position among the fields of
/// that role under the parent. Desktop text fields are rarely labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    spec: WidgetSpec,
    position: usize,
}

impl TextField {
    pub fn new(role: impl Into<String>) -> Self {
        TextField {
            spec: WidgetSpec::new("", role),
            position: 0,
        }
    }

    pub fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.spec = self.spec.with_parent(parent);
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn enter_text(&self, desktop: &mut Desktop<'_>, text: &str) -> OtoResult<()> {
        info!(
            "Entering {} characters into {} field #{}...",
            text.chars().count(),
            self.spec.role(),
            self.position
        );
        let field = self.nth_instance(desktop)?;
        let tree = desktop.tree();
        tree.blink(field)?;
        tree.set_text(field, text)
    }

    pub fn get_text(&self, desktop: &mut Desktop<'_>) -> OtoResult<String> {
        info!(
            "Retrieving text from {} field #{}...",
            self.spec.role(),
            self.position
        );
        let field = self.nth_instance(desktop)?;
        let tree = desktop.tree();
        tree.blink(field)?;
        let text = tree.text(field)?;
        debug!("Text:\n{}", text);
        Ok(text)
    }

    fn nth_instance(&self, desktop: &mut Desktop<'_>) -> OtoResult<NodeId> {
        let fields = self.get_all_instances(desktop)?;
        self.pick(&fields)
    }

    fn pick(&self, fields: &[NodeId]) -> OtoResult<NodeId> {
        fields
            .get(self.position)
            .copied()
            .ok_or_else(|| OtoError::IndexOutOfRange {
                role: self.spec.role().to_string(),
                position: self.position,
                found: fields.len(),
            })
    }
}

impl Widget for TextField {
    fn spec(&self) -> &WidgetSpec {
        &self.spec
    }

    /// The field at this position. No field of the role at all is `NotFound`.
    fn locate_under(&self, desktop: &mut Desktop<'_>, parent: NodeId) -> OtoResult<NodeId> {
        let fields = desktop.tree().find_all(parent, &self.spec.filter)?;
        if fields.is_empty() {
            return Err(self.spec.not_found());
        }
        self.pick(&fields)
    }
}

impl Clickable for TextField {}
