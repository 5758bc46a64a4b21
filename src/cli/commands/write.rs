//! Write command implementation.
//!
//! The `goreadme write` command generates a package's README.

use std::path::PathBuf;

use crate::cli::args::PackageArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::readme::write_readme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::display_path;

/// The write command implementation.
pub struct WriteCommand {
    settings: Settings,
    args: PackageArgs,
}

impl WriteCommand {
    /// Create a new write command.
    pub fn new(settings: Settings, args: PackageArgs) -> Self {
        Self { settings, args }
    }

    /// Path the README is written to.
    pub fn readme_path(&self) -> PathBuf {
        self.settings.package_readme(self.args.output.as_deref())
    }
}

impl Command for WriteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.readme_path();
        let formatter = self.settings.formatter();

        ui.detail(&format!(
            "Rendering {} with {}",
            self.args.package, self.settings.renderer
        ));
        write_readme(&formatter, &self.args.package, &path)?;

        ui.success(&format!(
            "Wrote {}",
            display_path(&self.settings.project_root, &path)
        ));
        Ok(CommandResult::success())
    }
}
