//! src/errors.rs

use std::io;
use std::path::PathBuf;

/// Every way an install run can fail. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("not a git repository: {} does not exist", hooks_dir.display())]
    NotAGitRepository { hooks_dir: PathBuf },

    #[error("invalid hook name '{name}': must be a plain file name")]
    InvalidHookName { name: String },

    #[error("hook '{name}': only files inside the project can be used to generate git hooks ({})", path.display())]
    PathEscapesProject { name: String, path: PathBuf },

    #[error("hook '{name}': could not access hook resource {}", path.display())]
    ResourceUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write hook with name: {name}")]
    HookWriteFailed {
        name: String,
        #[source]
        source: io::Error,
    },
}
