//! `git collab`: set or clear the pair/mob identity in git config.

use std::io::Write;

use anyhow::{Context, Result};

use gitcollab_core::identity::{
    CollabResolver, IdentityField, IdentityScope, IdentityStore, IdentityUpdate,
};

use crate::{style, Invocation};

/// Resolve `initials` and store the identity, or clear it when `initials`
/// is empty. Then report the resulting global and local settings.
pub fn run<W: Write>(
    out: &mut W,
    invocation: &Invocation,
    global_flag: bool,
    initials: &[String],
) -> Result<()> {
    let (mut store, config) = invocation.open_workspace()?;
    let scope = IdentityScope::from_global_flag(global_flag || config.global);

    if initials.is_empty() {
        let update = IdentityUpdate::unset(&config.email_policy);
        update
            .apply(&mut store, scope)
            .context("failed to update git config")?;
        writeln!(
            out,
            "Unset{} user.name, {}user.initials",
            if scope == IdentityScope::Global { " global" } else { "" },
            if update.touches(IdentityField::Email) { "user.email, " } else { "" },
        )?;
    } else {
        let identity = CollabResolver::new(&config).resolve_for_identity(initials)?;
        IdentityUpdate::set(&identity)
            .apply(&mut store, scope)
            .context("failed to update git config")?;
    }

    for field in IdentityField::ALL {
        report_setting(out, &store, field)?;
    }
    Ok(())
}

/// Print the global and local value of `field`, noting when local wins.
fn report_setting<W, S>(out: &mut W, store: &S, field: IdentityField) -> Result<()>
where
    W: Write,
    S: IdentityStore,
{
    let global = store.read(IdentityScope::Global, field)?;
    let local = store.read(IdentityScope::Local, field)?;

    if global.is_some() && local.is_some() {
        writeln!(
            out,
            "{}",
            style::note(&format!("NOTE: Overriding global {} setting with local.", field.key()))
        )?;
    }
    for (scope, value) in [("global", global), ("local", local)] {
        if let Some(value) = value {
            writeln!(out, "{}{} {}", style::scope_label(scope), field.key(), value)?;
        }
    }
    Ok(())
}
