use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::desktop::widget::Widget;
use crate::desktop::windows::{PASSWORD_WINDOW, PasswordWindow};

type Entry = Box<dyn Widget + Send + Sync>;

/// Named widget descriptors. Parent references are resolved through here.
///
/// Built once and then only read.
#[derive(Default)]
pub struct WidgetCatalog {
    entries: BTreeMap<String, Entry>,
}

impl WidgetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        name: impl Into<String>,
        widget: impl Widget + Send + Sync + 'static,
    ) -> Self {
        self.entries.insert(name.into(), Box::new(widget));
        self
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Widget + Send + Sync)> {
        self.entries.get(name).map(|entry| &**entry)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &(dyn Widget + Send + Sync))> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), &**entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for WidgetCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// The process-wide widget catalog.
pub static CATALOG: LazyLock<WidgetCatalog> = LazyLock::new(default_catalog);

pub fn default_catalog() -> WidgetCatalog {
    let window = PasswordWindow::new();
    WidgetCatalog::new()
        .with("PasswordWindow.username_field", window.username_field.clone())
        .with("PasswordWindow.password_field", window.password_field.clone())
        .with("PasswordWindow.cancel_button", window.cancel_button.clone())
        .with("PasswordWindow.ok_button", window.ok_button.clone())
        .with(PASSWORD_WINDOW, window)
}
