//! Verify command implementation.
//!
//! The `goreadme verify` command checks one package's README.

use std::path::PathBuf;

use crate::cli::args::PackageArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::readme::verify_readme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::display_path;

/// The verify command implementation.
pub struct VerifyCommand {
    settings: Settings,
    args: PackageArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(settings: Settings, args: PackageArgs) -> Self {
        Self { settings, args }
    }

    /// Path of the README being verified.
    pub fn readme_path(&self) -> PathBuf {
        self.settings.package_readme(self.args.output.as_deref())
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.readme_path();
        let shown = display_path(&self.settings.project_root, &path);
        let formatter = self.settings.formatter();

        if verify_readme(&formatter, &self.args.package, &path)? {
            ui.success(&format!("{} is up to date", shown));
            Ok(CommandResult::success())
        } else {
            ui.error(&format!(
                "{} is out of date for {}. Run 'goreadme write {}' to regenerate it.",
                shown, self.args.package, self.args.package
            ));
            Ok(CommandResult::failure(1))
        }
    }
}
