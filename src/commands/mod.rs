pub mod init;
pub mod install;
pub mod list;

use crate::config::DEFAULT_CONFIG_FILE;
use std::path::{Path, PathBuf};

/// `--config` is taken relative to the project directory; absolute paths win.
fn config_path(project_dir: &Path, config: Option<&Path>) -> PathBuf {
    project_dir.join(config.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)))
}
