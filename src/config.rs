//! src/config.rs

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::hook::HookSpec;

/// Looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hookmate.toml";

const DEFAULT_CONFIG: &str = r#"# hookmate configuration

# Inline hooks: the body is written to .git/hooks/<name> after a `#!/bin/sh` line.
[hooks]
pre-commit = "git diff --cached --check"

# Resource hooks: files inside the project, copied as they are.
# Paths are relative to the project root and may not leave it.
[resource-hooks]
# pre-push = "scripts/pre-push.sh"
"#;

/// Hook definitions for one project.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// Hook name to inline script body.
    #[serde(default)]
    pub hooks: BTreeMap<String, String>,
    /// Hook name to a project-relative script path.
    #[serde(default, rename = "resource-hooks", alias = "resourceHooks")]
    pub resource_hooks: BTreeMap<String, PathBuf>,
}

impl HookConfig {
    pub fn specs(&self) -> Vec<HookSpec> {
        HookSpec::collect(&self.hooks, &self.resource_hooks)
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty() && self.resource_hooks.is_empty()
    }
}

pub fn parse_config(content: &str) -> Result<HookConfig> {
    toml::from_str(content).context("Could not parse config file")
}

pub fn load_config(config_path: &Path) -> Result<HookConfig> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Could not read config file {}", config_path.display()))?;
    parse_config(&config_content)
        .with_context(|| format!("Invalid config file {}", config_path.display()))
}

/// Writes the starter config. An existing file is only replaced with `force`.
pub fn create_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        );
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Could not write {}", config_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_both_tables() {
        let config = parse_config(
            r#"
            [hooks]
            pre-commit = "echo hi"

            [resource-hooks]
            pre-push = "scripts/pre-push.sh"
            "#,
        )
        .unwrap();

        assert_eq!(config.hooks["pre-commit"], "echo hi");
        assert_eq!(
            config.resource_hooks["pre-push"],
            PathBuf::from("scripts/pre-push.sh")
        );
        assert_eq!(config.specs().len(), 2);
    }

    #[test]
    fn test_missing_tables_are_empty() {
        let config = parse_config("").unwrap();
        assert!(config.is_empty());

        let config = parse_config("[hooks]\npost-merge = \"cargo build\"\n").unwrap();
        assert!(config.resource_hooks.is_empty());
        assert!(!config.is_empty());
    }

    #[test]
    fn test_camel_case_alias() {
        let config = parse_config("[resourceHooks]\npre-push = \"hook.sh\"\n").unwrap();
        assert_eq!(config.resource_hooks["pre-push"], PathBuf::from("hook.sh"));
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        assert!(parse_config("[hookz]\npre-commit = \"echo\"\n").is_err());
    }

    #[test]
    fn test_multiline_inline_body() {
        let config = parse_config(
            "[hooks]\npre-commit = '''\ncargo fmt --check\ncargo clippy'''\n",
        )
        .unwrap();
        assert_eq!(config.hooks["pre-commit"], "cargo fmt --check\ncargo clippy");
    }

    #[test]
    fn test_default_config_round_trips_through_loader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        create_default_config(&path, false).unwrap();
        let config = load_config(&path).unwrap();

        assert_eq!(config.hooks["pre-commit"], "git diff --cached --check");
        assert!(config.resource_hooks.is_empty());
    }

    #[test]
    fn test_create_refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[hooks]\n").unwrap();

        assert!(create_default_config(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[hooks]\n");

        create_default_config(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("pre-commit"));
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
