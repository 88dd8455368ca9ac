//! Boundary to the host's persistent identity configuration.

use std::fmt;

use tracing::info;

use super::resolver::ResolvedIdentity;
use crate::config::EmailPolicy;
use crate::errors::GitError;

/// Where an identity is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityScope {
    /// The current repository.
    Local,
    /// Every repository of the current user.
    Global,
}

impl IdentityScope {
    pub fn from_global_flag(global: bool) -> Self {
        if global {
            IdentityScope::Global
        } else {
            IdentityScope::Local
        }
    }
}

impl fmt::Display for IdentityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityScope::Local => write!(f, "local"),
            IdentityScope::Global => write!(f, "global"),
        }
    }
}

/// A stored identity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Email,
    Initials,
}

impl IdentityField {
    pub const ALL: [IdentityField; 3] = [
        IdentityField::Name,
        IdentityField::Email,
        IdentityField::Initials,
    ];

    /// git config key, e.g. `user.name`.
    pub fn key(&self) -> &'static str {
        match self {
            IdentityField::Name => "user.name",
            IdentityField::Email => "user.email",
            IdentityField::Initials => "user.initials",
        }
    }
}

/// Persistent store for `user.*` identity fields.
pub trait IdentityStore {
    /// Set `field` at `scope`; `None` unsets it.
    fn write(
        &mut self,
        scope: IdentityScope,
        field: IdentityField,
        value: Option<&str>,
    ) -> Result<(), GitError>;

    /// Current value of `field` at exactly `scope`.
    fn read(&self, scope: IdentityScope, field: IdentityField) -> Result<Option<String>, GitError>;

    /// Value git would use: local when set, otherwise global.
    fn read_effective(&self, field: IdentityField) -> Result<Option<String>, GitError> {
        match self.read(IdentityScope::Local, field)? {
            Some(value) => Ok(Some(value)),
            None => self.read(IdentityScope::Global, field),
        }
    }
}

/// The set of field writes produced by one `git collab` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityUpdate {
    pub writes: Vec<(IdentityField, Option<String>)>,
}

impl IdentityUpdate {
    /// Store a resolved identity. Email is left untouched when absent.
    pub fn set(identity: &ResolvedIdentity) -> Self {
        let mut writes = vec![
            (IdentityField::Name, Some(identity.composed_name.clone())),
            (IdentityField::Initials, Some(identity.initials_line())),
        ];
        if let Some(email) = &identity.email {
            writes.push((IdentityField::Email, Some(email.clone())));
        }
        Self { writes }
    }

    /// Clear the identity. Email is only cleared when the config manages it.
    pub fn unset(policy: &EmailPolicy) -> Self {
        let mut writes = vec![(IdentityField::Name, None), (IdentityField::Initials, None)];
        if !policy.is_absent() {
            writes.push((IdentityField::Email, None));
        }
        Self { writes }
    }

    pub fn touches(&self, field: IdentityField) -> bool {
        self.writes.iter().any(|(f, _)| *f == field)
    }

    pub fn apply<S: IdentityStore + ?Sized>(
        &self,
        store: &mut S,
        scope: IdentityScope,
    ) -> Result<(), GitError> {
        for (field, value) in &self.writes {
            info!(%scope, key = field.key(), value = ?value, "updating git identity");
            store.write(scope, *field, value.as_deref())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<(bool, &'static str), String>,
    }

    impl IdentityStore for MemoryStore {
        fn write(
            &mut self,
            scope: IdentityScope,
            field: IdentityField,
            value: Option<&str>,
        ) -> Result<(), GitError> {
            let key = (scope == IdentityScope::Global, field.key());
            match value {
                Some(v) => self.values.insert(key, v.to_string()),
                None => self.values.remove(&key),
            };
            Ok(())
        }

        fn read(
            &self,
            scope: IdentityScope,
            field: IdentityField,
        ) -> Result<Option<String>, GitError> {
            Ok(self
                .values
                .get(&(scope == IdentityScope::Global, field.key()))
                .cloned())
        }
    }

    fn identity(email: Option<&str>) -> ResolvedIdentity {
        ResolvedIdentity {
            composed_name: "Aa Bb and Bb Cc".into(),
            initials: vec!["ab".into(), "bc".into()],
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_set_writes_all_fields() {
        let mut store = MemoryStore::default();
        IdentityUpdate::set(&identity(Some("the-collab+aa+bb@the-host.com")))
            .apply(&mut store, IdentityScope::Local)
            .unwrap();

        let read = |f| store.read(IdentityScope::Local, f).unwrap();
        assert_eq!(read(IdentityField::Name).as_deref(), Some("Aa Bb and Bb Cc"));
        assert_eq!(read(IdentityField::Initials).as_deref(), Some("ab bc"));
        assert_eq!(
            read(IdentityField::Email).as_deref(),
            Some("the-collab+aa+bb@the-host.com")
        );
        assert_eq!(store.read(IdentityScope::Global, IdentityField::Name).unwrap(), None);
    }

    #[test]
    fn test_set_without_email_leaves_email_alone() {
        let mut store = MemoryStore::default();
        store
            .write(IdentityScope::Local, IdentityField::Email, Some("me@example.com"))
            .unwrap();

        let update = IdentityUpdate::set(&identity(None));
        assert!(!update.touches(IdentityField::Email));
        update.apply(&mut store, IdentityScope::Local).unwrap();

        assert_eq!(
            store.read(IdentityScope::Local, IdentityField::Email).unwrap().as_deref(),
            Some("me@example.com")
        );
    }

    #[test]
    fn test_unset() {
        let mut store = MemoryStore::default();
        IdentityUpdate::set(&identity(Some("x@y.com")))
            .apply(&mut store, IdentityScope::Global)
            .unwrap();

        IdentityUpdate::unset(&EmailPolicy::Absent)
            .apply(&mut store, IdentityScope::Global)
            .unwrap();
        assert_eq!(store.read(IdentityScope::Global, IdentityField::Name).unwrap(), None);
        assert_eq!(store.read(IdentityScope::Global, IdentityField::Initials).unwrap(), None);
        assert!(store.read(IdentityScope::Global, IdentityField::Email).unwrap().is_some());

        IdentityUpdate::unset(&EmailPolicy::Literal("x@y.com".into()))
            .apply(&mut store, IdentityScope::Global)
            .unwrap();
        assert_eq!(store.read(IdentityScope::Global, IdentityField::Email).unwrap(), None);
    }

    #[test]
    fn test_read_effective_prefers_local() {
        let mut store = MemoryStore::default();
        store
            .write(IdentityScope::Global, IdentityField::Initials, Some("ab"))
            .unwrap();
        assert_eq!(
            store.read_effective(IdentityField::Initials).unwrap().as_deref(),
            Some("ab")
        );

        store
            .write(IdentityScope::Local, IdentityField::Initials, Some("bc cd"))
            .unwrap();
        assert_eq!(
            store.read_effective(IdentityField::Initials).unwrap().as_deref(),
            Some("bc cd")
        );
    }

    #[test]
    fn test_scope_from_flag() {
        assert_eq!(IdentityScope::from_global_flag(true), IdentityScope::Global);
        assert_eq!(IdentityScope::from_global_flag(false), IdentityScope::Local);
        assert_eq!(IdentityField::Initials.key(), "user.initials");
    }
}
