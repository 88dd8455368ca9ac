//! Shared implementation of the `git collab` and `git collab-commit` tools.

pub mod collab;
pub mod commit;
pub mod style;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gitcollab_core::{config, git};
use gitcollab_core::errors::CoreError;
use gitcollab_core::{CollabsConfig, GitConfigStore};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GIT_COLLAB_LOG";

/// Minimal logging for CLI: warnings to stderr unless `GIT_COLLAB_LOG` says otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Where a CLI invocation runs and which files it may touch.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub cwd: PathBuf,
    pub home: PathBuf,
    /// Global git config file written by `--global`.
    pub global_config: PathBuf,
}

impl Invocation {
    /// Directories for `cwd` and `home`, with no environment overrides.
    pub fn new(cwd: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            cwd: cwd.into(),
            global_config: git::global_config_path(&home, None, None),
            home,
        }
    }

    /// The invoking process: current directory, home directory, and the
    /// `GIT_CONFIG_GLOBAL` / `XDG_CONFIG_HOME` overrides git honors.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read the current directory")?;
        let home = dirs::home_dir().context("could not determine the home directory")?;
        let git_config_global = std::env::var_os("GIT_CONFIG_GLOBAL").map(PathBuf::from);
        let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        let global_config = git::global_config_path(
            &home,
            git_config_global.as_deref(),
            xdg_config_home.as_deref(),
        );
        Ok(Self {
            cwd,
            home,
            global_config,
        })
    }

    /// Open the enclosing repository, then find and parse the nearest `.collabs`.
    ///
    /// The repository check comes first so that running outside a repository
    /// never reports a missing `.collabs` file instead.
    pub fn open_workspace(&self) -> Result<(GitConfigStore, CollabsConfig), CoreError> {
        let store = GitConfigStore::discover(&self.cwd, &self.home)?
            .with_global_path(self.global_config.clone());
        let path = config::locate(&self.cwd, &self.home)?;
        let config = CollabsConfig::load(&path)?;
        debug!(path = %path.display(), "using collabs file");
        Ok((store, config))
    }
}
