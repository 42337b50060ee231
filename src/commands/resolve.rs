//! Implementation of the `resolve`, `get` and `profiles` commands.

use super::{resolver_for, to_json};
use crate::cli::{DomainArgs, GetArgs, ResolveArgs};
use crate::context::WorkspaceContext;
use crate::error::{ConfigError, Result};

/// Execute `addon-config resolve`.
pub fn cmd_resolve(ctx: &WorkspaceContext, args: ResolveArgs) -> Result<()> {
    println!("{}", render_resolve(ctx, &args)?);
    Ok(())
}

/// Execute `addon-config get`.
pub fn cmd_get(ctx: &WorkspaceContext, args: GetArgs) -> Result<()> {
    println!("{}", render_get(ctx, &args)?);
    Ok(())
}

/// Execute `addon-config profiles`.
pub fn cmd_profiles(ctx: &WorkspaceContext, args: DomainArgs) -> Result<()> {
    print!("{}", render_profiles(ctx, &args)?);
    Ok(())
}

pub(super) fn render_resolve(ctx: &WorkspaceContext, args: &ResolveArgs) -> Result<String> {
    let resolver = resolver_for(ctx, &args.domain)?;
    let doc = resolver.resolve(args.profile.as_deref())?;
    to_json(&doc)
}

pub(super) fn render_get(ctx: &WorkspaceContext, args: &GetArgs) -> Result<String> {
    let resolver = resolver_for(ctx, &args.domain)?;
    let doc = resolver.resolve(args.profile.as_deref())?;

    let value = doc.get(&args.path).ok_or_else(|| {
        ConfigError::Shape(format!(
            "'{}' not found in {} configuration (profile '{}')",
            args.path,
            resolver.domain().key,
            doc.profile
        ))
    })?;

    if value.is_container() {
        to_json(value)
    } else {
        Ok(value.to_string())
    }
}

pub(super) fn render_profiles(ctx: &WorkspaceContext, args: &DomainArgs) -> Result<String> {
    let resolver = resolver_for(ctx, &args.domain)?;
    let available = resolver.available_profiles()?;
    let active = resolver.active_profile()?;

    if available.is_empty() {
        return Ok(format!(
            "No profiles found in {}\n",
            ctx.profiles_dir(resolver.domain()).display()
        ));
    }

    let mut out = String::new();
    for name in &available {
        let marker = if *name == active { '*' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, name));
    }

    if !available.contains(&active) {
        log::warn!(
            "active profile '{}' of {} has no profile document",
            active,
            resolver.domain().key
        );
    }

    Ok(out)
}
