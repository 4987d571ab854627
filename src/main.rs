use clap::Parser;
use oto::cli::commands::{
    cmd_login, cmd_present, cmd_probe, cmd_render, format_elements, format_strategies,
    format_widgets,
};
use oto::cli::config::{Cli, Commands, load_config};
use oto::desktop::CATALOG;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Strategies => print!("{}", format_strategies()),
        Commands::Render { strategy, args } => cmd_render(&strategy, &args)?,
        Commands::Elements => print!("{}", format_elements()),
        Commands::Widgets => print!("{}", format_widgets(&CATALOG)),
        Commands::Probe { widget, tree, app } => {
            cmd_probe(&widget, tree.as_deref(), app.as_deref(), &config)?;
        }
        Commands::Login {
            username,
            password,
            tree,
            app,
        } => {
            let logged_in = cmd_login(
                &username,
                &password,
                tree.as_deref(),
                app.as_deref(),
                &config,
            )?;
            if !logged_in {
                std::process::exit(1);
            }
        }
        Commands::Present { element, url } => {
            let present = cmd_present(&element, url.as_deref(), &config)?;
            if !present {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// RUST_LOG wins; otherwise -v raises the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
