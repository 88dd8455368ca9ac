//! Shared styling utilities for the collab CLIs.

use console::Style;

/// Create a note-styled string (yellow).
pub fn note(msg: &str) -> String {
    let style = Style::new().yellow();
    style.apply_to(msg).to_string()
}

/// Scope label for a reported setting, padded so values line up.
pub fn scope_label(scope: &str) -> String {
    let style = Style::new().dim();
    let label = format!("{:<8}", format!("{scope}:"));
    style.apply_to(label).to_string()
}

/// Create a highlighted email address (cyan).
pub fn email(address: &str) -> String {
    let style = Style::new().cyan();
    style.apply_to(address).to_string()
}
