use tracing::info;

use crate::browser::base::Oto;
use crate::browser::selenium::SeleniumRc;
use crate::browser::server::SeleniumServer;
use crate::cli::config::{AppConfig, resolve_app_name};
use crate::desktop::bridge::BridgeTree;
use crate::desktop::catalog::WidgetCatalog;
use crate::desktop::memory::InMemoryTree;
use crate::desktop::resolver::Desktop;
use crate::desktop::tree::AccessibilityTree;
use crate::desktop::windows::login_via_popup;
use crate::error::{OtoError, OtoResult};
use crate::locator::{elements, strategies};

// ============================================================================
// Catalog listings
// ============================================================================

pub fn format_strategies() -> String {
    strategies::all()
        .iter()
        .map(|(name, strategy)| {
            format!(
                "{:<24} {}\n{:<24} {}\n",
                name,
                strategy.human_readable_template(),
                "",
                strategy.template()
            )
        })
        .collect()
}

pub fn format_elements() -> String {
    elements::all()
        .map(|(name, element)| format!("{:<20} {}\n", name, element))
        .collect()
}

pub fn format_widgets(catalog: &WidgetCatalog) -> String {
    catalog
        .iter()
        .map(|(name, widget)| {
            let spec = widget.spec();
            format!(
                "{:<32} role='{}' name='{}' parent={}\n",
                name,
                spec.role(),
                spec.name(),
                spec.parent.as_deref().unwrap_or("<application>")
            )
        })
        .collect()
}

// ============================================================================
// render subcommand
// ============================================================================

/// Render a named strategy, returning (locator, human readable).
pub fn render_strategy(name: &str, args: &[String]) -> OtoResult<(String, String)> {
    let strategy = strategies::lookup(name)
        .ok_or_else(|| OtoError::Config(format!("no strategy named '{}'", name)))?;
    Ok((
        strategy.render_locator(args)?,
        strategy.render_human_readable(args)?,
    ))
}

pub fn cmd_render(name: &str, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let (locator, human) = render_strategy(name, args)?;
    println!("locator:        {}", locator);
    println!("human readable: {}", human);
    Ok(())
}

// ============================================================================
// probe / login subcommands
// ============================================================================

/// Showing and focused state of a catalog widget.
pub fn probe_widget(desktop: &mut Desktop<'_>, name: &str) -> OtoResult<(bool, bool)> {
    let widget = desktop
        .catalog()
        .get(name)
        .ok_or_else(|| OtoError::UnknownWidget(name.to_string()))?;
    let showing = widget.is_showing(desktop)?;
    let focused = widget.is_focused(desktop)?;
    Ok((showing, focused))
}

pub fn cmd_probe(
    widget: &str,
    tree_path: Option<&str>,
    app: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = open_tree(tree_path, config)?;
    let mut desktop = Desktop::new(tree.as_mut()).app_name(resolve_app_name(app, config));

    let (showing, focused) = probe_widget(&mut desktop, widget)?;
    println!("{}: showing={} focused={}", widget, showing, focused);
    Ok(())
}

/// Log in through the popup; returns whether the popup was there.
pub fn cmd_login(
    username: &str,
    password: &str,
    tree_path: Option<&str>,
    app: Option<&str>,
    config: &AppConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut tree = open_tree(tree_path, config)?;
    let mut desktop = Desktop::new(tree.as_mut()).app_name(resolve_app_name(app, config));

    let logged_in = login_via_popup(&mut desktop, username, password)?;
    if logged_in {
        println!("Logged in as {}", username);
    } else {
        println!("Authentication popup not showing");
    }
    Ok(logged_in)
}

/// Tree fixture when given, otherwise the configured bridge.
pub fn open_tree(
    tree_path: Option<&str>,
    config: &AppConfig,
) -> OtoResult<Box<dyn AccessibilityTree>> {
    match tree_path {
        Some(path) => {
            info!("Loading tree fixture {}", path);
            Ok(Box::new(InMemoryTree::load(path)?))
        }
        None if config.desktop.bridge.is_empty() => Err(OtoError::Config(
            "no --tree fixture given and no desktop.bridge configured".into(),
        )),
        None => Ok(Box::new(BridgeTree::launch(&config.desktop.bridge)?)),
    }
}

// ============================================================================
// present subcommand
// ============================================================================

/// Open a page and check whether a catalog element is present.
pub fn cmd_present(
    element_name: &str,
    url: Option<&str>,
    config: &AppConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    let element = elements::lookup(element_name)
        .ok_or_else(|| OtoError::Config(format!("no element named '{}'", element_name)))?;

    let _server = if config.selenium.start_server {
        Some(SeleniumServer::launch(&config.selenium)?)
    } else {
        None
    };

    let selenium = &config.selenium;
    let driver = SeleniumRc::new(
        &selenium.server,
        selenium.port,
        &selenium.browser,
        &config.base_url,
    )?;
    let mut oto = Oto::new(driver, config.base_url.clone());

    info!(
        "Starting selenium session at http://{}:{}...",
        selenium.server, selenium.port
    );
    oto.start()?;

    let result = match url {
        Some(url) => oto.go(url),
        None => oto.go_base(),
    }
    .and_then(|_| oto.is_element_present(element));
    oto.stop();

    let present = result?;
    println!("{}: present={}", element_name, present);
    Ok(present)
}
