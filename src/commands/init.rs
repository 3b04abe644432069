use crate::config;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn handle_init(project_dir: &Path, config: Option<&Path>, force: bool) -> Result<()> {
    let config_path = super::config_path(project_dir, config);
    config::create_default_config(&config_path, force)
        .context("Failed to initialize configuration.")?;

    println!(
        "{}",
        format!("✅ Created default config file at {}", config_path.display()).green()
    );
    Ok(())
}
