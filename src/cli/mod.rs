//! CLI argument parsing for addon-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// addon-config: resolve layered add-on configuration and manage the feature registry.
///
/// Each add-on domain has a base configuration and a set of named profiles.
/// The effective configuration is the base with one profile merged on top;
/// the feature registry records which profile is active.
#[derive(Parser, Debug)]
#[command(name = "addon-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace root. Defaults to searching upward from the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for addon-config.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the merged configuration of a domain as JSON.
    Resolve(ResolveArgs),

    /// Print one value from the merged configuration.
    ///
    /// Scalars are printed bare; mappings and sequences as JSON.
    Get(GetArgs),

    /// List the profiles of a domain, marking the active one.
    Profiles(DomainArgs),

    /// Parse any configuration document and print it as JSON.
    Parse(ParseArgs),

    /// Show the feature registry.
    Status,

    /// Enable an add-on in the feature registry.
    Enable(DomainArgs),

    /// Disable an add-on in the feature registry.
    Disable(DomainArgs),

    /// Select the active profile of an add-on.
    SetProfile(SetProfileArgs),
}

/// A domain, by registry key (`3d_game_core`) or directory name (`3d-game-core`).
#[derive(Args, Debug)]
pub struct DomainArgs {
    pub domain: String,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    pub domain: String,

    /// Profile to apply instead of the registry's choice.
    #[arg(long, short)]
    pub profile: Option<String>,
}

/// Arguments for the `get` command.
#[derive(Args, Debug)]
pub struct GetArgs {
    pub domain: String,

    /// Dotted path, e.g. `budgets.frame.cpu_ms` or `rules.0`.
    pub path: String,

    /// Profile to apply instead of the registry's choice.
    #[arg(long, short)]
    pub profile: Option<String>,
}

/// Arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    pub file: PathBuf,
}

/// Arguments for the `set-profile` command.
#[derive(Args, Debug)]
pub struct SetProfileArgs {
    pub domain: String,
    pub profile: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
