//! Error types for the git collab core library.
//!
//! Each subsystem has its own error type derived with `thiserror`, and a
//! top-level [`CoreError`] enum unifies them all for callers that want a
//! single error type.

use thiserror::Error;

use crate::config::SAMPLE_CONFIG;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for the entire core library.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Git(#[from] GitError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from locating and parsing the `.collabs` document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `.collabs` file in the working directory, any parent, or home.
    #[error(
        "Could not find a .collabs file. Create a YAML file in your project or home directory.\n{}",
        SAMPLE_CONFIG
    )]
    NotFound,

    /// The document exists but is not the expected key/value shape.
    #[error("invalid .collabs file at '{path}': {detail}")]
    Invalid { path: String, detail: String },

    /// Generic I/O error reading the document.
    #[error("configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Resolution errors
// ---------------------------------------------------------------------------

/// Errors from turning initials into identities.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A requested initial has no `collabs` entry.
    #[error(
        "Couldn't find author name for initials: {0}. Add this person to the .collabs file in your project or home directory."
    )]
    UnknownInitials(String),

    /// The commit path found no stored `user.initials`.
    #[error("No collab set. Please set your collab with `git collab ...`")]
    NoCollabSet,

    /// A collaborator has no override address and the email section has no domain.
    #[error(
        "Can't build an email address for initials: {0}. Add an `email_addresses` entry or an `email.domain` to the .collabs file."
    )]
    MissingEmailDomain(String),
}

// ---------------------------------------------------------------------------
// Git errors
// ---------------------------------------------------------------------------

/// Errors from the git identity store and the commit runner.
#[derive(Debug, Error)]
pub enum GitError {
    /// The working directory is not inside a git repository.
    #[error("Not a git repository (or any of the parent directories): {0}")]
    NotARepository(String),

    /// A `git2` library error.
    #[error("git2 error: {0}")]
    Git2Error(#[from] git2::Error),

    /// The `git` binary was not found on `$PATH`.
    #[error("git binary not found: {0}")]
    BinaryNotFound(String),

    /// A `git` command could not report an exit status (killed by a signal).
    #[error("git command terminated without an exit code: {0}")]
    CommandFailed(String),

    /// Generic I/O wrapper.
    #[error("git I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = ResolveError::UnknownInitials("xx".into());
        assert!(err
            .to_string()
            .contains("Couldn't find author name for initials: xx"));
        assert!(err.to_string().contains("project or home directory"));

        let err = ResolveError::NoCollabSet;
        assert!(err.to_string().contains("git collab ..."));

        let err = ConfigError::NotFound;
        let msg = err.to_string();
        assert!(msg.starts_with("Could not find a .collabs file."));
        assert!(msg.contains("collabs:"));
        assert!(msg.contains("domain:"));

        let err = GitError::NotARepository("/tmp/nowhere".into());
        assert!(err.to_string().contains("Not a git repository"));
    }

    #[test]
    fn test_core_error_from_subsystem() {
        let core_err: CoreError = ResolveError::NoCollabSet.into();
        assert!(matches!(core_err, CoreError::Resolve(ResolveError::NoCollabSet)));

        let core_err: CoreError = ConfigError::NotFound.into();
        assert!(matches!(core_err, CoreError::Config(_)));
    }
}
