use crate::config;
use crate::installer::Installer;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_install(project_dir: &Path, config: Option<&Path>, dry_run: bool) -> Result<()> {
    let config_path = super::config_path(project_dir, config);
    let installer = Installer::new(project_dir)?;
    let hook_config = config::load_config(&config_path)?;

    if dry_run {
        println!("Checking hooks for {}", installer.hooks().path().display());
        for path in installer.plan(&hook_config.specs())? {
            println!("would write {}", path.display());
        }
        println!("{}", "✅ Dry run passed, nothing was written.".green());
        return Ok(());
    }

    let written = installer.run(&hook_config.hooks, &hook_config.resource_hooks)?;

    if written.is_empty() {
        println!(
            "{}",
            format!("⚠️ No hooks configured in {}", config_path.display()).yellow()
        );
        return Ok(());
    }

    for path in &written {
        println!("  {}", path.display());
    }
    println!(
        "{}",
        format!("✅ Installed {} git hook(s).", written.len()).green()
    );
    Ok(())
}
