//! Command implementations for addon-config.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler renders its output to a string first so the
//! rendering can be tested without capturing stdout.

mod features;
mod parse;
mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::context::WorkspaceContext;
use crate::domain::AddonDomain;
use crate::error::{ConfigError, Result};
use crate::profile::ProfileResolver;
use serde::Serialize;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli { root, command, .. } = cli;

    match command {
        Command::Resolve(args) => resolve::cmd_resolve(&workspace(root)?, args),
        Command::Get(args) => resolve::cmd_get(&workspace(root)?, args),
        Command::Profiles(args) => resolve::cmd_profiles(&workspace(root)?, args),
        Command::Parse(args) => parse::cmd_parse(args),
        Command::Status => features::cmd_status(&workspace(root)?),
        Command::Enable(args) => features::cmd_enable(&workspace(root)?, args),
        Command::Disable(args) => features::cmd_disable(&workspace(root)?, args),
        Command::SetProfile(args) => features::cmd_set_profile(&workspace(root)?, args),
    }
}

/// `--root` is taken verbatim; otherwise search upward from the current directory.
fn workspace(root: Option<PathBuf>) -> Result<WorkspaceContext> {
    match root {
        Some(root) => Ok(WorkspaceContext::at(root)),
        None => WorkspaceContext::resolve(),
    }
}

fn domain_for(name: &str) -> Result<&'static AddonDomain> {
    AddonDomain::lookup(name)
}

fn resolver_for(ctx: &WorkspaceContext, name: &str) -> Result<ProfileResolver> {
    let domain = domain_for(name)?;
    Ok(ProfileResolver::new(ctx.clone(), *domain))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ConfigError::Shape(format!("failed to render JSON: {}", e)))
}
