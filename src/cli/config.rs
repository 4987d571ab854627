use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::desktop::resolver::DEFAULT_APP_NAME;

pub const DEFAULT_CONFIG_PATH: &str = "oto.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "oto",
    version,
    about = "Locate and drive browser and desktop UI elements by name"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: oto.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the named locator strategies
    Strategies,

    /// Render a strategy's locator and description
    Render {
        /// Strategy name, e.g. id or table_cell
        strategy: String,

        /// Positional arguments for the templates
        args: Vec<String>,
    },

    /// List the named browser elements
    Elements,

    /// List the named desktop widgets
    Widgets,

    /// Report whether a desktop widget is showing and focused
    Probe {
        /// Widget name from the widget catalog
        widget: String,

        /// Tree fixture (YAML) to probe instead of the live bridge
        #[arg(long)]
        tree: Option<String>,

        /// Application to search (overrides config)
        #[arg(long)]
        app: Option<String>,
    },

    /// Log in through the desktop authentication popup, if it is up
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Tree fixture (YAML) to use instead of the live bridge
        #[arg(long)]
        tree: Option<String>,

        /// Application to search (overrides config)
        #[arg(long)]
        app: Option<String>,
    },

    /// Open a page in the browser and check whether an element is present
    Present {
        /// Element name from the element catalog
        element: String,

        /// URL to open (default: base_url from config)
        #[arg(long)]
        url: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `oto.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub selenium: SeleniumConfig,

    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub desktop: DesktopConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeleniumConfig {
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_browser")]
    pub browser: String,

    /// Launch selenium-server ourselves before connecting
    #[serde(default)]
    pub start_server: bool,

    #[serde(default = "default_jar")]
    pub jar: String,

    #[serde(default = "default_options")]
    pub options: String,

    #[serde(default = "default_startup_wait")]
    pub startup_wait_secs: u64,
}

impl Default for SeleniumConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            browser: default_browser(),
            start_server: false,
            jar: default_jar(),
            options: default_options(),
            startup_wait_secs: default_startup_wait(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Command line of the accessibility bridge process
    #[serde(default)]
    pub bridge: Vec<String>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            bridge: Vec::new(),
        }
    }
}

// Serde default helpers
fn default_server() -> String { "localhost".to_string() }
fn default_port() -> u16 { 4444 }
fn default_browser() -> String { "*firefox".to_string() }
fn default_jar() -> String { "./selenium-server.jar".to_string() }
fn default_options() -> String {
    "-trustAllSSLCertificates -timeout 120 -firefoxProfileTemplate ./firefox-profile".to_string()
}
fn default_startup_wait() -> u64 { 15 }
fn default_app_name() -> String { DEFAULT_APP_NAME.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring malformed config {}: {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Application name to search: CLI > config > default.
pub fn resolve_app_name(cli_app: Option<&str>, config: &AppConfig) -> String {
    cli_app
        .map(str::to_string)
        .unwrap_or_else(|| config.desktop.app_name.clone())
}
