//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// goreadme - README.md files generated from package documentation.
#[derive(Debug, Parser)]
#[command(name = "goreadme")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .goreadme.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Documentation renderer program
    #[arg(long, global = true, env = "GOREADME_RENDERER")]
    pub renderer: Option<String>,

    /// Source root passed to the renderer
    #[arg(long, global = true, env = "GOROOT")]
    pub goroot: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the README for a package
    Write(PackageArgs),

    /// Check that a package's README is up to date
    Verify(PackageArgs),

    /// Check every generated README under a directory
    Check(ScanArgs),

    /// List generated READMEs under a directory
    Find(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `write` and `verify` commands.
#[derive(Debug, Clone, clap::Args)]
pub struct PackageArgs {
    /// Package to document (e.g. github.com/user/repo/pkg)
    pub package: String,

    /// README path (defaults to the README name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` and `find` commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Directory to scan (defaults to the project root)
    #[arg(short, long)]
    pub base: Option<PathBuf>,

    /// README file name to match, ignoring case
    #[arg(long)]
    pub readme_name: Option<String>,

    /// Directory to skip, with everything below it (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "DIR")]
    pub exclude: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
