//! Runs `git commit` under a drawn collab identity.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::{info, instrument};

use crate::errors::GitError;
use crate::identity::CommitIdentity;

/// Build `git commit <args>` with author and committer set to `identity`.
pub fn commit_command<S: AsRef<OsStr>>(
    dir: &Path,
    identity: &CommitIdentity,
    args: &[S],
) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir)
        .arg("commit")
        .args(args)
        .envs(identity.env_vars());
    cmd
}

/// Run `git commit` and return its exit code.
#[instrument(skip_all, fields(dir = %dir.display(), email = %identity.chosen_email))]
pub fn run_commit<S: AsRef<OsStr>>(
    dir: &Path,
    identity: &CommitIdentity,
    args: &[S],
) -> Result<i32, GitError> {
    let status = commit_command(dir, identity, args).status().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GitError::BinaryNotFound("git".into())
        } else {
            GitError::IoError(e)
        }
    })?;

    let code = status
        .code()
        .ok_or_else(|| GitError::CommandFailed(status.to_string()))?;
    info!(code, "git commit finished");
    Ok(code)
}
