//! `git collab-commit`: commit with an author email drawn from the collab.

use std::ffi::OsStr;
use std::io::Write;

use anyhow::Result;
use rand::Rng;

use gitcollab_core::git;
use gitcollab_core::identity::{CollabResolver, CommitIdentity, IdentityField, IdentityStore};

use crate::{style, Invocation};

/// Draw this commit's identity from the initials stored in git config.
pub fn resolve<R: Rng + ?Sized>(invocation: &Invocation, rng: &mut R) -> Result<CommitIdentity> {
    let (store, config) = invocation.open_workspace()?;
    let stored = store
        .read_effective(IdentityField::Initials)?
        .unwrap_or_default();
    let initials: Vec<&str> = stored.split_whitespace().collect();
    Ok(CollabResolver::new(&config).resolve_for_commit(&initials, rng)?)
}

/// Run `git commit <git_args>` in the invocation directory under a freshly
/// drawn identity and return git's exit code.
pub fn run<W, S, R>(out: &mut W, invocation: &Invocation, git_args: &[S], rng: &mut R) -> Result<i32>
where
    W: Write,
    S: AsRef<OsStr>,
    R: Rng + ?Sized,
{
    let identity = resolve(invocation, rng)?;
    writeln!(out, "Committing under {}", style::email(&identity.chosen_email))?;
    out.flush()?;
    Ok(git::run_commit(&invocation.cwd, &identity, git_args)?)
}
