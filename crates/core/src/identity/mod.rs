//! Collaborator identity resolution.
//!
//! The pipeline is:
//! 1. Look up each requested initial in the `.collabs` table
//! 2. Compose names and email addresses ([`compose`])
//! 3. Hand the result to an [`IdentityStore`] or to `git commit`

pub mod compose;
pub mod resolver;
pub mod store;

pub use compose::{build_email, join_names};
pub use resolver::{AuthorEntry, CollabResolver, CommitIdentity, ResolvedIdentity};
pub use store::{IdentityField, IdentityScope, IdentityStore, IdentityUpdate};
