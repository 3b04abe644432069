//! src/installer.rs

use crate::errors::InstallError;
use crate::hook::{
    check_hook_name, HookDirectory, HookSource, HookSpec, HookStatus, ResolvedHook, SHEBANG,
};
use crate::resource;
use anyhow::{Context, Result};
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Installer {
    root: PathBuf,
    hooks: HookDirectory,
}

impl Installer {
    pub fn new(repo_root: &Path) -> Result<Self, InstallError> {
        let hooks = HookDirectory::open(repo_root)?;
        // The hooks dir exists, so the root does too.
        let root = fs::canonicalize(repo_root).map_err(|_| InstallError::NotAGitRepository {
            hooks_dir: hooks.path().to_path_buf(),
        })?;
        Ok(Self { root, hooks })
    }

    pub fn hooks(&self) -> &HookDirectory {
        &self.hooks
    }

    /// Installs every inline hook, then every resource hook. Stops at the
    /// first error; hooks written before it are left in place.
    pub fn run(
        &self,
        inline_hooks: &BTreeMap<String, String>,
        resource_hooks: &BTreeMap<String, PathBuf>,
    ) -> Result<Vec<PathBuf>, InstallError> {
        self.install(&HookSpec::collect(inline_hooks, resource_hooks))
    }

    /// Turns a spec into the script that gets written.
    pub fn resolve(&self, spec: &HookSpec) -> Result<ResolvedHook, InstallError> {
        check_hook_name(&spec.name)?;
        let script = match &spec.source {
            HookSource::Inline(text) => format!("{SHEBANG}\n{text}"),
            HookSource::Resource(relative) => {
                let path = resource::resolve_in_project(&self.root, relative).ok_or_else(|| {
                    InstallError::PathEscapesProject {
                        name: spec.name.clone(),
                        path: relative.clone(),
                    }
                })?;
                resource::read_script(&path).map_err(|source| InstallError::ResourceUnreadable {
                    name: spec.name.clone(),
                    path,
                    source,
                })?
            }
        };

        Ok(ResolvedHook {
            name: spec.name.clone(),
            script,
        })
    }

    /// Resolves and writes each hook in order.
    pub fn install(&self, specs: &[HookSpec]) -> Result<Vec<PathBuf>, InstallError> {
        specs
            .iter()
            .map(|spec| {
                info!("Generating {} ({})", spec.name, spec.origin());
                self.resolve(spec).and_then(|hook| self.hooks.write(&hook))
            })
            .collect()
    }

    /// Same checks as `install`, but only reports where each hook would go.
    pub fn plan(&self, specs: &[HookSpec]) -> Result<Vec<PathBuf>, InstallError> {
        specs
            .iter()
            .map(|spec| {
                self.resolve(spec)
                    .map(|hook| self.hooks.hook_path(&hook.name))
            })
            .collect()
    }

    pub fn status(&self, specs: &[HookSpec]) -> Result<Vec<(String, HookStatus)>> {
        let mut statuses = Vec::with_capacity(specs.len());
        for spec in specs {
            let hook = self.resolve(spec)?;
            let status = self
                .hooks
                .status(&hook)
                .with_context(|| format!("Failed to read installed hook '{}'", hook.name))?;
            statuses.push((hook.name, status));
        }
        Ok(statuses)
    }
}
