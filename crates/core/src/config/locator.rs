//! Nearest-first lookup of the `.collabs` document.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::ConfigError;

/// File name searched for in every candidate directory.
pub const CONFIG_FILE_NAME: &str = ".collabs";

/// Directories searched for a `.collabs` file, most specific first.
///
/// Starts at `start`, walks every parent up to the filesystem root, then
/// appends `home` unless the walk already visited it.
pub fn candidate_directories(start: &Path, home: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = start.ancestors().map(Path::to_path_buf).collect();
    if !dirs.iter().any(|d| d == home) {
        dirs.push(home.to_path_buf());
    }
    dirs
}

/// Find the nearest `.collabs` file for `start`, falling back to `home`.
pub fn locate(start: &Path, home: &Path) -> Result<PathBuf, ConfigError> {
    for dir in candidate_directories(start, home) {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found collabs file");
            return Ok(candidate);
        }
    }
    debug!(start = %start.display(), home = %home.display(), "no collabs file found");
    Err(ConfigError::NotFound)
}
