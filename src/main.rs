//! Pagesplit - splits a single-page HTML site into standalone pages.

mod check;
mod cli;
mod compose;
mod config;
mod document;
mod logger;
mod modals;
mod restitch;
mod split;
mod utils;

use anyhow::Result;
use check::check_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SplitConfig;
use modals::extract_snippets;
use restitch::restitch_site;
use split::split_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SplitConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Split => split_site(config),
        Commands::Restitch => restitch_site(config),
        Commands::Check => check_site(config),
        Commands::Modals { .. } => extract_snippets(config),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is fine: the defaults describe the original
/// coffee-site layout and the CLI can override paths on top of them.
fn load_config(cli: &'static Cli) -> Result<SplitConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SplitConfig::from_path(&config_path)?
    } else {
        SplitConfig::default()
    };
    config.update_with_cli(cli);
    config.validate(&cli.command)?;

    Ok(config)
}
