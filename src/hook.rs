//! src/hook.rs

use crate::errors::InstallError;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Prepended to every inline hook body.
pub const SHEBANG: &str = "#!/bin/sh";

/// Owner read/write/execute, nothing for group or other.
#[cfg(unix)]
const HOOK_MODE: u32 = 0o700;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookSource {
    /// Literal script body from the config file.
    Inline(String),
    /// A file inside the project, relative to the project root.
    Resource(PathBuf),
}

/// A named hook as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSpec {
    pub name: String,
    pub source: HookSource,
}

impl HookSpec {
    pub fn inline(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: HookSource::Inline(text.into()),
        }
    }

    pub fn resource(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: HookSource::Resource(path.into()),
        }
    }

    /// Builds the install list: inline hooks first, then resource hooks.
    pub fn collect(
        inline_hooks: &BTreeMap<String, String>,
        resource_hooks: &BTreeMap<String, PathBuf>,
    ) -> Vec<HookSpec> {
        let inline = inline_hooks
            .iter()
            .map(|(name, text)| HookSpec::inline(name, text));
        let resources = resource_hooks
            .iter()
            .map(|(name, path)| HookSpec::resource(name, path));
        inline.chain(resources).collect()
    }

    /// Short human-readable origin, used by `list`.
    pub fn origin(&self) -> String {
        match &self.source {
            HookSource::Inline(_) => "inline".to_string(),
            HookSource::Resource(path) => path.display().to_string(),
        }
    }
}

/// The exact content that ends up in `.git/hooks/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHook {
    pub name: String,
    pub script: String,
}

#[derive(Debug, PartialEq)]
pub enum HookStatus {
    NotInstalled,
    UpToDate,
    Outdated,
}

/// Hook names are not matched against Git's list, but each one has to be a
/// single plain file name so it lands directly in the hooks directory.
pub fn check_hook_name(name: &str) -> Result<(), InstallError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(InstallError::InvalidHookName {
            name: name.to_string(),
        }),
    }
}

/// `<repo_root>/.git/hooks`, known to exist.
#[derive(Debug, Clone)]
pub struct HookDirectory {
    path: PathBuf,
}

impl HookDirectory {
    /// Fails with `NotAGitRepository` unless the hooks directory is already there.
    /// Nothing else under `.git` is looked at.
    pub fn open(repo_root: &Path) -> Result<Self, InstallError> {
        let path = repo_root.join(".git").join("hooks");
        if !path.is_dir() {
            return Err(InstallError::NotAGitRepository { hooks_dir: path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn hook_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Writes the hook, replacing whatever was there, and makes it executable
    /// for the owner only.
    pub fn write(&self, hook: &ResolvedHook) -> Result<PathBuf, InstallError> {
        check_hook_name(&hook.name)?;
        let hook_path = self.hook_path(&hook.name);
        let write_failed = |source: io::Error| InstallError::HookWriteFailed {
            name: hook.name.clone(),
            source,
        };

        fs::write(&hook_path, hook.script.as_bytes()).map_err(write_failed)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&hook_path, fs::Permissions::from_mode(HOOK_MODE))
                .map_err(write_failed)?;
        }

        Ok(hook_path)
    }

    /// Compares the file on disk with what `write` would produce.
    pub fn status(&self, hook: &ResolvedHook) -> io::Result<HookStatus> {
        match fs::read(self.hook_path(&hook.name)) {
            Ok(existing) if existing == hook.script.as_bytes() => Ok(HookStatus::UpToDate),
            Ok(_) => Ok(HookStatus::Outdated),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HookStatus::NotInstalled),
            Err(e) => Err(e),
        }
    }
}
