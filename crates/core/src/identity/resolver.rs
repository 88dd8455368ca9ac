//! Resolution of initials into composed identities.
//!
//! [`CollabResolver`] serves two callers: `git collab`, which stores a
//! combined name and email, and `git collab-commit`, which draws one
//! collaborator's email at random for each commit.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::compose::{build_email, join_names};
use crate::config::CollabsConfig;
use crate::errors::ResolveError;

/// One collaborator, derived from a `"Full Name[; email-id]"` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    pub initials: String,
    pub full_name: String,
    /// Explicit id after `;`, else the lowercased first word of the name.
    pub email_id: String,
}

impl AuthorEntry {
    pub fn parse(initials: &str, raw: &str) -> Self {
        let (name, explicit_id) = match raw.split_once(';') {
            Some((name, id)) => (name.trim(), Some(id.trim()).filter(|id| !id.is_empty())),
            None => (raw.trim(), None),
        };
        let email_id = match explicit_id {
            Some(id) => id.to_string(),
            None => name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_lowercase(),
        };
        Self {
            initials: initials.to_string(),
            full_name: name.to_string(),
            email_id,
        }
    }
}

/// Identity written by `git collab`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub composed_name: String,
    /// Requested initials, sorted and unique.
    pub initials: Vec<String>,
    /// `None` when the config has no `email` section.
    pub email: Option<String>,
}

impl ResolvedIdentity {
    /// Value stored under `user.initials`.
    pub fn initials_line(&self) -> String {
        self.initials.join(" ")
    }
}

/// Author and committer identity for a single `git commit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub composed_name: String,
    pub chosen_email: String,
}

impl CommitIdentity {
    /// Environment that makes `git commit` use this identity for both
    /// author and committer.
    pub fn env_vars(&self) -> [(&'static str, &str); 4] {
        [
            ("GIT_AUTHOR_NAME", self.composed_name.as_str()),
            ("GIT_AUTHOR_EMAIL", self.chosen_email.as_str()),
            ("GIT_COMMITTER_NAME", self.composed_name.as_str()),
            ("GIT_COMMITTER_EMAIL", self.chosen_email.as_str()),
        ]
    }
}

/// Resolves initials against a parsed `.collabs` document.
pub struct CollabResolver<'a> {
    config: &'a CollabsConfig,
}

impl<'a> CollabResolver<'a> {
    pub fn new(config: &'a CollabsConfig) -> Self {
        Self { config }
    }

    /// Look up one collaborator. Fails on the first unknown initial.
    pub fn author(&self, initials: &str) -> Result<AuthorEntry, ResolveError> {
        self.config
            .collab_entry(initials)
            .map(|raw| AuthorEntry::parse(initials, raw))
            .ok_or_else(|| ResolveError::UnknownInitials(initials.to_string()))
    }

    /// Resolve the identity `git collab` stores.
    ///
    /// Authors are de-duplicated and sorted by name before composition, so
    /// any permutation of the same initials gives the same result.
    pub fn resolve_for_identity<S: AsRef<str>>(
        &self,
        initials: &[S],
    ) -> Result<ResolvedIdentity, ResolveError> {
        let mut pairs = Vec::with_capacity(initials.len());
        for initial in initials.iter().map(AsRef::as_ref) {
            let author = self.author(initial)?;
            pairs.push((author.full_name, author.email_id));
        }
        pairs.sort();
        pairs.dedup();

        let (names, email_ids): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();
        let composed_name = join_names(&names);
        let email = build_email(&email_ids, &self.config.email_policy);

        let mut sorted_initials: Vec<String> =
            initials.iter().map(|i| i.as_ref().to_string()).collect();
        sorted_initials.sort();
        sorted_initials.dedup();

        debug!(name = %composed_name, email = ?email, "resolved collab identity");
        Ok(ResolvedIdentity {
            composed_name,
            initials: sorted_initials,
            email,
        })
    }

    /// Resolve the identity for one commit, drawing the email from `rng`.
    ///
    /// `initials` keeps the order stored in `user.initials`. Each collab's
    /// address is their `email_addresses` override, else `{email_id}@{domain}`
    /// with no prefix. A literal `email` value is never used here.
    pub fn resolve_for_commit<S, R>(
        &self,
        initials: &[S],
        rng: &mut R,
    ) -> Result<CommitIdentity, ResolveError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if initials.is_empty() {
            return Err(ResolveError::NoCollabSet);
        }

        let mut seen: Vec<String> = Vec::with_capacity(initials.len());
        let mut names = Vec::with_capacity(initials.len());
        let mut emails = Vec::with_capacity(initials.len());
        for initial in initials.iter().map(AsRef::as_ref) {
            let key = initial.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            let author = self.author(initial)?;
            let email = self.commit_email(&author)?;
            names.push(author.full_name);
            emails.push(email);
        }

        let composed_name = join_names(&names);
        let chosen_email = emails
            .choose(rng)
            .cloned()
            .ok_or(ResolveError::NoCollabSet)?;

        debug!(name = %composed_name, email = %chosen_email, candidates = emails.len(), "drew commit author");
        Ok(CommitIdentity {
            composed_name,
            chosen_email,
        })
    }

    fn commit_email(&self, author: &AuthorEntry) -> Result<String, ResolveError> {
        if let Some(address) = self.config.email_override(&author.initials) {
            return Ok(address.to_string());
        }
        match self.config.email_policy.domain() {
            Some(domain) => Ok(format!("{}@{}", author.email_id, domain)),
            None => Err(ResolveError::MissingEmailDomain(author.initials.clone())),
        }
    }
}
