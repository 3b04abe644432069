use crate::config;
use crate::hook::HookStatus;
use crate::installer::Installer;
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::path::Path;

fn status_label(status: &HookStatus) -> ColoredString {
    match status {
        HookStatus::NotInstalled => "not installed".yellow(),
        HookStatus::UpToDate => "up to date".green(),
        HookStatus::Outdated => "outdated".red(),
    }
}

pub fn handle_list(project_dir: &Path, config: Option<&Path>) -> Result<()> {
    let config_path = super::config_path(project_dir, config);
    let installer = Installer::new(project_dir)?;
    let hook_config = config::load_config(&config_path)?;

    if hook_config.is_empty() {
        println!(
            "{}",
            format!("⚠️ No hooks configured in {}", config_path.display()).yellow()
        );
        return Ok(());
    }

    let specs = hook_config.specs();
    let statuses = installer.status(&specs)?;
    for (spec, (name, status)) in specs.iter().zip(&statuses) {
        println!("{:<20} {:<30} {}", name, spec.origin(), status_label(status));
    }
    Ok(())
}
