//! Command-line interface for goreadme.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, PackageArgs, ScanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
