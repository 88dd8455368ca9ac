//! [`IdentityStore`] backed by git config files via `git2`.
//!
//! Only two files are consulted: the repository's shared `config` (local
//! scope) and one global file. The global file follows git's lookup:
//! `GIT_CONFIG_GLOBAL` when set, else `~/.gitconfig`, else
//! `$XDG_CONFIG_HOME/git/config` when only that one exists. System config
//! and `include`/`includeIf` directives are not read, so
//! [`IdentityStore::read_effective`] can miss values git itself would see.

use std::path::{Path, PathBuf};

use git2::{Config, ErrorCode, Repository};
use tracing::{debug, info, instrument};

use crate::errors::GitError;
use crate::identity::{IdentityField, IdentityScope, IdentityStore};

/// Reads and writes `user.*` in the repository config (local scope) and in
/// the user's global git config (global scope).
#[derive(Debug, Clone)]
pub struct GitConfigStore {
    local_path: PathBuf,
    global_path: PathBuf,
}

/// Global config file git would use for `home`.
///
/// `git_config_global` mirrors `GIT_CONFIG_GLOBAL`; `xdg_config_home`
/// mirrors `XDG_CONFIG_HOME` and defaults to `home/.config`.
pub fn global_config_path(
    home: &Path,
    git_config_global: Option<&Path>,
    xdg_config_home: Option<&Path>,
) -> PathBuf {
    if let Some(path) = git_config_global.filter(|p| !p.as_os_str().is_empty()) {
        return path.to_path_buf();
    }
    let dotfile = home.join(".gitconfig");
    if dotfile.exists() {
        return dotfile;
    }
    let xdg = xdg_config_home
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| home.join(".config"))
        .join("git")
        .join("config");
    if xdg.is_file() {
        xdg
    } else {
        dotfile
    }
}

impl GitConfigStore {
    /// Find the repository containing `start`. The global scope defaults to
    /// [`global_config_path`] for `home` with no environment overrides.
    pub fn discover<P: AsRef<Path>>(start: P, home: &Path) -> Result<Self, GitError> {
        let start = start.as_ref();
        let repo = Repository::discover(start)
            .map_err(|_| GitError::NotARepository(start.display().to_string()))?;
        // Linked worktrees share the main repository's config file.
        let local_path = repo.commondir().join("config");
        info!(path = %local_path.display(), "opened git repository");

        Ok(Self {
            local_path,
            global_path: global_config_path(home, None, None),
        })
    }

    /// Use `path` as the global config file.
    pub fn with_global_path(mut self, path: PathBuf) -> Self {
        self.global_path = path;
        self
    }

    pub fn config_path(&self, scope: IdentityScope) -> &Path {
        match scope {
            IdentityScope::Local => &self.local_path,
            IdentityScope::Global => &self.global_path,
        }
    }

    fn open(&self, scope: IdentityScope) -> Result<Config, GitError> {
        Ok(Config::open(self.config_path(scope))?)
    }
}

impl IdentityStore for GitConfigStore {
    #[instrument(skip(self))]
    fn write(
        &mut self,
        scope: IdentityScope,
        field: IdentityField,
        value: Option<&str>,
    ) -> Result<(), GitError> {
        let mut config = self.open(scope)?;
        match value {
            Some(value) => config.set_str(field.key(), value)?,
            None => match config.remove(field.key()) {
                Ok(()) => {}
                Err(e) if e.code() == ErrorCode::NotFound => {
                    debug!(key = field.key(), "key already unset");
                }
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }

    fn read(&self, scope: IdentityScope, field: IdentityField) -> Result<Option<String>, GitError> {
        if !self.config_path(scope).exists() {
            return Ok(None);
        }
        let config = self.open(scope)?;
        match config.get_string(field.key()) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
