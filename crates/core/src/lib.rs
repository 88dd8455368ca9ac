//! git collab core library.
//!
//! This crate resolves collaborator initials into git author identities:
//! locating and parsing the `.collabs` file, composing pair/mob names and
//! email addresses, drawing a per-commit author email, and storing the
//! result in git config.

pub mod config;
pub mod errors;
pub mod git;
pub mod identity;

// Re-exports for convenience.
pub use config::CollabsConfig;
pub use git::GitConfigStore;
pub use identity::CollabResolver;
