//! Command-line surface
//!
//! `Cli` is the clap definition; `dispatch` maps a parsed `Command` onto the
//! library operations without touching stdout, so the whole path is testable
//! through `Cli::try_parse_from`.

pub mod dispatch;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::domain::VersionBump;

#[derive(Parser, Debug)]
#[command(
    name = "semver",
    version,
    about = "Parse semantic versions and bump their components"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Print debug diagnostics to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Parses a semver into its parts and prints them (JSON by default)
    Parse {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(long, value_enum, help = "Output format, overriding the config file")]
        format: Option<OutputFormat>,
    },

    /// Bump a version using one of the subcommands [major, minor, patch, prerel]
    Bump {
        #[command(subcommand)]
        target: BumpCommand,
    },

    /// Checks a version string against the grammar; exits 1 if invalid
    Validate {
        #[arg(value_name = "VERSION")]
        input: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum BumpCommand {
    /// Bumps the major version 1.1.1 -> 2.0.0
    Major(BumpArgs),
    /// Bumps the minor version up by one 1.1.1 -> 1.2.0
    Minor(BumpArgs),
    /// Bumps the patch version up by one 1.1.1 -> 1.1.2
    Patch(BumpArgs),
    /// Bumps the prerelease 1.1.1 -> 1.1.2-0 -> 1.1.2-1
    Prerel(BumpArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct BumpArgs {
    #[arg(value_name = "VERSION")]
    pub input: String,

    #[arg(long, help = "Drop prerelease/metadata on major, minor and prerel bumps")]
    pub clear_suffixes: bool,
}

impl BumpCommand {
    pub fn kind(&self) -> VersionBump {
        match self {
            BumpCommand::Major(_) => VersionBump::Major,
            BumpCommand::Minor(_) => VersionBump::Minor,
            BumpCommand::Patch(_) => VersionBump::Patch,
            BumpCommand::Prerel(_) => VersionBump::Prerelease,
        }
    }

    pub fn args(&self) -> &BumpArgs {
        match self {
            BumpCommand::Major(args)
            | BumpCommand::Minor(args)
            | BumpCommand::Patch(args)
            | BumpCommand::Prerel(args) => args,
        }
    }
}
