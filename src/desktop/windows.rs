use tracing::info;

use crate::desktop::clickable::{Button, Clickable, TextField};
use crate::desktop::resolver::Desktop;
use crate::desktop::tree::MouseButton;
use crate::desktop::widget::{Widget, WidgetSpec};
use crate::error::OtoResult;

/// Catalog name of the authentication dialog.
pub const PASSWORD_WINDOW: &str = "PasswordWindow";

/// The "Authentication Required" dialog the browser raises for HTTP auth.
///
/// Its members refer back to the dialog by catalog name, so each one
/// resolves the dialog afresh whenever it is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordWindow {
    spec: WidgetSpec,
    pub username_field: TextField,
    pub password_field: TextField,
    pub cancel_button: Button,
    pub ok_button: Button,
}

impl PasswordWindow {
    pub fn new() -> Self {
        PasswordWindow {
            spec: WidgetSpec::new("Authentication Required", "dialog"),
            username_field: TextField::new("entry").with_parent(PASSWORD_WINDOW),
            password_field: TextField::new("password text").with_parent(PASSWORD_WINDOW),
            cancel_button: Button::new("Cancel").with_parent(PASSWORD_WINDOW),
            ok_button: Button::new("OK").with_parent(PASSWORD_WINDOW),
        }
    }
}

impl Default for PasswordWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PasswordWindow {
    fn spec(&self) -> &WidgetSpec {
        &self.spec
    }
}

/// Log in through the authentication popup if it is up.
///
/// Returns `false` without touching anything when the popup isn't showing.
pub fn login_via_popup(
    desktop: &mut Desktop<'_>,
    username: &str,
    password: &str,
) -> OtoResult<bool> {
    let window = PasswordWindow::new();
    if !window.is_showing(desktop)? {
        return Ok(false);
    }

    info!("Logging in via popup (username '{}')...", username);
    window.focus(desktop)?;
    window.username_field.click(desktop, MouseButton::Primary)?;
    window.username_field.enter_text(desktop, username)?;
    window.password_field.click(desktop, MouseButton::Primary)?;
    window.password_field.enter_text(desktop, password)?;
    window.ok_button.click(desktop, MouseButton::Primary)?;
    Ok(true)
}
