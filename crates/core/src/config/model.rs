//! Typed representation of a parsed `.collabs` document.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::ConfigError;

// ---------------------------------------------------------------------------
// Email policy
// ---------------------------------------------------------------------------

/// How the `email` section turns email-ids into an address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmailPolicy {
    /// No `email` key: email is never resolved or touched.
    #[default]
    Absent,
    /// A scalar `email`: the same address for every collab.
    Literal(String),
    /// An `email` mapping: `[prefix+]id[+id...]@domain`.
    Templated {
        prefix: Option<String>,
        domain: String,
        no_solo_prefix: bool,
    },
}

impl EmailPolicy {
    pub fn is_absent(&self) -> bool {
        matches!(self, EmailPolicy::Absent)
    }

    /// The templated domain, if any. Literal addresses carry no domain.
    pub fn domain(&self) -> Option<&str> {
        match self {
            EmailPolicy::Templated { domain, .. } => Some(domain),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config model
// ---------------------------------------------------------------------------

/// Validated `.collabs` document. Keys of `collabs` and `email_overrides`
/// are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollabsConfig {
    /// Initials -> raw `"Full Name[; email-id]"` entry.
    pub collabs: BTreeMap<String, String>,
    pub email_policy: EmailPolicy,
    /// Initials -> literal email address, used by the commit path.
    pub email_overrides: BTreeMap<String, String>,
    /// Target the global identity scope by default.
    pub global: bool,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    collabs: Option<BTreeMap<String, String>>,
    #[serde(default)]
    email: Option<RawEmail>,
    #[serde(default)]
    email_addresses: Option<BTreeMap<String, String>>,
    #[serde(default)]
    global: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEmail {
    Literal(String),
    Templated(RawEmailTemplate),
}

#[derive(Debug, Deserialize)]
struct RawEmailTemplate {
    #[serde(default)]
    prefix: Option<String>,
    domain: String,
    #[serde(default, alias = "noSoloPrefix")]
    no_solo_prefix: Option<bool>,
}

impl CollabsConfig {
    /// Read and parse the document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading collabs file");
        let contents = std::fs::read_to_string(path)?;
        Self::parse_document(&contents, &path.display().to_string())
    }

    /// Parse a document held in memory.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Self::parse_document(raw, "<inline>")
    }

    fn parse_document(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let invalid = |detail: String| ConfigError::Invalid {
            path: origin.to_string(),
            detail,
        };

        let value: serde_yaml::Value =
            serde_yaml::from_str(raw).map_err(|e| invalid(e.to_string()))?;
        if !value.is_mapping() {
            return Err(invalid("expected a key/value mapping at the top level".into()));
        }
        let raw: RawConfig = serde_yaml::from_value(value).map_err(|e| invalid(e.to_string()))?;

        let email_policy = match raw.email {
            None => EmailPolicy::Absent,
            Some(RawEmail::Literal(address)) => EmailPolicy::Literal(address),
            Some(RawEmail::Templated(t)) => EmailPolicy::Templated {
                prefix: t.prefix,
                domain: t.domain,
                no_solo_prefix: t.no_solo_prefix.unwrap_or(false),
            },
        };

        let config = Self {
            collabs: lowercase_keys(raw.collabs.unwrap_or_default()),
            email_policy,
            email_overrides: lowercase_keys(raw.email_addresses.unwrap_or_default()),
            global: raw.global.unwrap_or(false),
        };
        debug!(
            collabs = config.collabs.len(),
            overrides = config.email_overrides.len(),
            global = config.global,
            "parsed collabs file"
        );
        Ok(config)
    }

    /// Raw entry for `initials`, matched case-insensitively.
    pub fn collab_entry(&self, initials: &str) -> Option<&str> {
        self.collabs
            .get(&initials.to_lowercase())
            .map(String::as_str)
    }

    /// Override address for `initials`, matched case-insensitively.
    pub fn email_override(&self, initials: &str) -> Option<&str> {
        self.email_overrides
            .get(&initials.to_lowercase())
            .map(String::as_str)
    }
}

fn lowercase_keys(map: BTreeMap<String, String>) -> BTreeMap<String, String> {
    map.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_templated_email() {
        let config = CollabsConfig::parse(
            r#"
collabs:
  ab: Aa Bb
  js: Josh Susser; jsusser
email:
  prefix: the-collab
  domain: the-host.com
"#,
        )
        .unwrap();

        assert_eq!(config.collabs.len(), 2);
        assert_eq!(config.collab_entry("js"), Some("Josh Susser; jsusser"));
        assert_eq!(
            config.email_policy,
            EmailPolicy::Templated {
                prefix: Some("the-collab".into()),
                domain: "the-host.com".into(),
                no_solo_prefix: false,
            }
        );
        assert!(!config.global);
    }

    #[test]
    fn test_parse_literal_email() {
        let config = CollabsConfig::parse("collabs:\n  ab: Aa Bb\nemail: foo@bar.com\n").unwrap();
        assert_eq!(config.email_policy, EmailPolicy::Literal("foo@bar.com".into()));
        assert_eq!(config.email_policy.domain(), None);
    }

    #[test]
    fn test_parse_absent_email() {
        let config = CollabsConfig::parse("collabs:\n  ab: Aa Bb\n").unwrap();
        assert!(config.email_policy.is_absent());

        let config = CollabsConfig::parse("collabs:\n  ab: Aa Bb\nemail:\n").unwrap();
        assert!(config.email_policy.is_absent());
    }

    #[test]
    fn test_parse_domain_only_and_no_solo_prefix() {
        let config =
            CollabsConfig::parse("collabs:\n  ab: Aa Bb\nemail:\n  domain: foo.com\n").unwrap();
        assert_eq!(
            config.email_policy,
            EmailPolicy::Templated {
                prefix: None,
                domain: "foo.com".into(),
                no_solo_prefix: false,
            }
        );

        let config = CollabsConfig::parse(
            "collabs:\n  ab: Aa Bb\nemail:\n  prefix: collabs\n  domain: foo.com\n  no_solo_prefix: true\n",
        )
        .unwrap();
        assert!(matches!(
            config.email_policy,
            EmailPolicy::Templated { no_solo_prefix: true, .. }
        ));

        let config = CollabsConfig::parse(
            "collabs:\n  ab: Aa Bb\nemail:\n  prefix: collabs\n  domain: foo.com\n  noSoloPrefix: true\n",
        )
        .unwrap();
        assert_eq!(
            config.email_policy,
            EmailPolicy::Templated {
                prefix: Some("collabs".into()),
                domain: "foo.com".into(),
                no_solo_prefix: true,
            }
        );
    }

    #[test]
    fn test_keys_are_lowercased() {
        let config = CollabsConfig::parse(
            "collabs:\n  AB: Aa Bb\nemail_addresses:\n  Ab: aa@example.com\nglobal: true\n",
        )
        .unwrap();
        assert_eq!(config.collab_entry("ab"), Some("Aa Bb"));
        assert_eq!(config.collab_entry("aB"), Some("Aa Bb"));
        assert_eq!(config.email_override("AB"), Some("aa@example.com"));
        assert!(config.global);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config =
            CollabsConfig::parse("collabs:\n  ab: Aa Bb\nsomething_else: 42\n").unwrap();
        assert_eq!(config.collabs.len(), 1);
    }

    #[test]
    fn test_missing_collabs_is_empty() {
        let config = CollabsConfig::parse("global: true\n").unwrap();
        assert!(config.collabs.is_empty());
    }

    #[test]
    fn test_invalid_documents() {
        for raw in ["", "just a string", "- a\n- b\n", "collabs: [unclosed"] {
            assert!(
                matches!(CollabsConfig::parse(raw), Err(ConfigError::Invalid { .. })),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_templated_email_requires_domain() {
        let result = CollabsConfig::parse("collabs:\n  ab: Aa Bb\nemail:\n  prefix: collab\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".collabs");
        std::fs::write(&path, "collabs:\n  ab: Pete O'Connor\n").unwrap();

        let config = CollabsConfig::load(&path).unwrap();
        assert_eq!(config.collab_entry("ab"), Some("Pete O'Connor"));
    }

    #[test]
    fn test_load_invalid_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".collabs");
        std::fs::write(&path, "nope").unwrap();

        match CollabsConfig::load(&path) {
            Err(ConfigError::Invalid { path: p, .. }) => assert!(p.ends_with(".collabs")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
