//! Implementation of the registry commands: `status`, `enable`, `disable`
//! and `set-profile`.

use super::{domain_for, resolver_for};
use crate::cli::{DomainArgs, SetProfileArgs};
use crate::context::WorkspaceContext;
use crate::domain::{AddonDomain, BUILTIN_DOMAINS};
use crate::error::Result;
use crate::registry::{FeatureRegistry, RegistryEntry};

/// Execute `addon-config status`.
pub fn cmd_status(ctx: &WorkspaceContext) -> Result<()> {
    print!("{}", render_status(ctx)?);
    Ok(())
}

/// Execute `addon-config enable`.
pub fn cmd_enable(ctx: &WorkspaceContext, args: DomainArgs) -> Result<()> {
    println!("{}", toggle(ctx, &args, true)?);
    Ok(())
}

/// Execute `addon-config disable`.
pub fn cmd_disable(ctx: &WorkspaceContext, args: DomainArgs) -> Result<()> {
    println!("{}", toggle(ctx, &args, false)?);
    Ok(())
}

/// Execute `addon-config set-profile`.
pub fn cmd_set_profile(ctx: &WorkspaceContext, args: SetProfileArgs) -> Result<()> {
    println!("{}", set_profile(ctx, &args)?);
    Ok(())
}

pub(super) fn render_status(ctx: &WorkspaceContext) -> Result<String> {
    let registry = FeatureRegistry::load(&ctx.registry_path)?;

    let mut out = String::new();
    out.push_str("Add-ons\n");
    out.push_str("=======\n");

    for (key, entry) in registry.entries() {
        let title = AddonDomain::by_key(key).map(|domain| domain.title);
        out.push_str(&status_line(key, title, entry, ""));
    }

    for domain in BUILTIN_DOMAINS {
        if registry.get(domain.key).is_none() {
            let entry = RegistryEntry::defaults_for(domain);
            out.push_str(&status_line(
                domain.key,
                Some(domain.title),
                &entry,
                " (not registered)",
            ));
        }
    }

    Ok(out)
}

fn status_line(key: &str, title: Option<&str>, entry: &RegistryEntry, note: &str) -> String {
    let label = match title {
        Some(title) => format!("{} [{}]", key, title),
        None => key.to_string(),
    };
    format!(
        "  {:<40} {:<8} profile={} version={}{}\n",
        label,
        if entry.enabled { "enabled" } else { "disabled" },
        entry.profile.as_deref().unwrap_or("-"),
        entry.version.as_deref().unwrap_or("-"),
        note
    )
}

pub(super) fn toggle(ctx: &WorkspaceContext, args: &DomainArgs, enabled: bool) -> Result<String> {
    let domain = domain_for(&args.domain)?;
    let mut registry = FeatureRegistry::load(&ctx.registry_path)?;

    let changed = if enabled {
        registry.enable(domain)
    } else {
        registry.disable(domain)
    };
    registry.save(&ctx.registry_path)?;

    let state = if enabled { "enabled" } else { "disabled" };
    Ok(if changed {
        format!("{} {}", domain.key, state)
    } else {
        format!("{} already {}", domain.key, state)
    })
}

pub(super) fn set_profile(ctx: &WorkspaceContext, args: &SetProfileArgs) -> Result<String> {
    let resolver = resolver_for(ctx, &args.domain)?;
    let available = resolver.available_profiles()?;

    let mut registry = FeatureRegistry::load(&ctx.registry_path)?;
    registry.set_profile(resolver.domain(), &args.profile, &available)?;
    registry.save(&ctx.registry_path)?;

    Ok(format!(
        "{} profile set to '{}'",
        resolver.domain().key,
        args.profile
    ))
}
