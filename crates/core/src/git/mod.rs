//! Git-backed collaborators: the `user.*` identity store and `git commit`.

pub mod commit;
pub mod config_store;

pub use commit::{commit_command, run_commit};
pub use config_store::{global_config_path, GitConfigStore};
