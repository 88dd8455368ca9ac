//! `.collabs` configuration: locating the nearest document and parsing it
//! into a typed [`CollabsConfig`].
//!
//! The document format:
//!
//! ```yaml
//! collabs:
//!   eh: Edward Hieatt
//!   js: Josh Susser; jsusser
//! email:
//!   prefix: collab
//!   domain: example.com
//!   no_solo_prefix: true
//! email_addresses:
//!   zr: zach.robinson@example.com
//! global: false
//! ```

pub mod locator;
pub mod model;

pub use locator::{candidate_directories, locate, CONFIG_FILE_NAME};
pub use model::{CollabsConfig, EmailPolicy};

/// Sample document shown whenever no `.collabs` file can be found.
pub const SAMPLE_CONFIG: &str = "\
Format: <initials>: <name>[; <email>]
Example:
# .collabs - configuration for 'git collab'
# place in project or home directory
collabs:
  eh: Edward Hieatt
  js: Josh Susser; jsusser
  sf: Serguei Filimonov; serguei
email:
  prefix: collab
  domain: example.com
";
