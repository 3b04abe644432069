//! src/resource.rs
//!
//! Resource hooks reference files by a path relative to the project root.
//! Before anything is read, the path is resolved to its canonical form and
//! has to stay inside the (canonical) project root.

use log::debug;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolves `relative` against `root` and returns the resolved path if it is
/// `root` itself or lies below it. `root` must already be canonical.
pub fn resolve_in_project(root: &Path, relative: &Path) -> Option<PathBuf> {
    let joined = root.join(relative);
    let resolved = fs::canonicalize(&joined).unwrap_or_else(|_| canonicalize_lenient(&joined));
    debug!("{} resolved to {}", relative.display(), resolved.display());

    // Component-wise, so `/repo-other` is not inside `/repo`.
    resolved.starts_with(root).then_some(resolved)
}

/// Reads a hook script and rejoins its lines with `\n`. `\r\n`, `\r` and `\n`
/// all end a line, and a trailing line ending is dropped.
pub fn read_script(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    Ok(unified.lines().collect::<Vec<_>>().join("\n"))
}

/// Canonical form of a path that may not exist: the deepest existing prefix
/// of the path as written is canonicalized (symlinks, then `..`), and only
/// the tail that is not on disk is folded lexically.
fn canonicalize_lenient(path: &Path) -> PathBuf {
    let components: Vec<Component> = path.components().collect();

    for split in (1..=components.len()).rev() {
        let existing: PathBuf = components[..split].iter().collect();
        if let Ok(canonical) = fs::canonicalize(&existing) {
            return fold_lexically(canonical, &components[split..]);
        }
    }
    fold_lexically(PathBuf::new(), &components)
}

/// Drops `.` and folds `..` into its parent.
fn fold_lexically(mut base: PathBuf, tail: &[Component]) -> PathBuf {
    for component in tail {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                base.pop();
            }
            other => base.push(other.as_os_str()),
        }
    }
    base
}
