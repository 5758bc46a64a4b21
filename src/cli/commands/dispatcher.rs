//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, Settings, SettingsOverrides};
use crate::error::{GoreadmeError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root, run from
    /// `working_dir`.
    pub fn new(project_root: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            project_root,
            working_dir,
        }
    }

    /// Load the config file and apply the global CLI overrides.
    pub fn settings(&self, cli: &Cli) -> Result<Settings> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        let overrides = SettingsOverrides {
            renderer: cli.renderer.clone(),
            root_path: cli.goroot.clone(),
        };
        Ok(Settings::resolve(&self.project_root, config, overrides)
            .with_working_dir(&self.working_dir))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = match &cli.command {
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                return cmd.execute(ui);
            }
            _ => match self.settings(cli) {
                Ok(s) => s,
                Err(GoreadmeError::ConfigParseError { path, message }) => {
                    ui.error(&format!("Parse error in {}: {}", path.display(), message));
                    return Ok(CommandResult::failure(2));
                }
                Err(e) => return Err(e),
            },
        };
        tracing::debug!("Resolved settings: {:?}", settings);

        match &cli.command {
            Commands::Write(args) => {
                let cmd = super::write::WriteCommand::new(settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Verify(args) => {
                let cmd = super::verify::VerifyCommand::new(settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Find(args) => {
                let cmd = super::find::FindCommand::new(settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
