//! Pure string composition for collab names and email addresses.

use crate::config::EmailPolicy;

/// Join display names into one author name: `A`, `A and B`, `A, B and C`.
///
/// Empty names and repeats are dropped; order is otherwise preserved.
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    let mut kept: Vec<&str> = Vec::with_capacity(names.len());
    for name in names.iter().map(AsRef::as_ref) {
        if !name.is_empty() && !kept.contains(&name) {
            kept.push(name);
        }
    }

    match kept.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

/// Build the shared email address for a set of email-ids.
///
/// Returns `None` when the policy is [`EmailPolicy::Absent`].
pub fn build_email<S: AsRef<str>>(email_ids: &[S], policy: &EmailPolicy) -> Option<String> {
    match policy {
        EmailPolicy::Absent => None,
        EmailPolicy::Literal(address) => Some(address.clone()),
        EmailPolicy::Templated {
            prefix,
            domain,
            no_solo_prefix,
        } => {
            let prefix = match prefix {
                Some(_) if *no_solo_prefix && email_ids.len() == 1 => None,
                other => other.as_deref(),
            };
            let local: Vec<&str> = prefix
                .into_iter()
                .chain(email_ids.iter().map(AsRef::as_ref))
                .collect();
            Some(format!("{}@{}", local.join("+"), domain))
        }
    }
}
