//! src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;
mod config;
mod errors;
mod hook;
mod installer;
mod resource;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine the current directory.")?,
    };

    match cli.command {
        Commands::Install { config, dry_run } => {
            commands::install::handle_install(&project_dir, config.as_deref(), dry_run)?;
        }
        Commands::Init { config, force } => {
            commands::init::handle_init(&project_dir, config.as_deref(), force)?;
        }
        Commands::List { config } => {
            commands::list::handle_list(&project_dir, config.as_deref())?;
        }
    }

    Ok(())
}

/// Info for this crate by default, debug with `-v`. `RUST_LOG` is applied on top.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
