//! Check command implementation.
//!
//! The `goreadme check` command verifies every generated README under a
//! directory and lists the stale ones.

use crate::cli::args::ScanArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::readme::check_readmes;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{
    display_path, readmes, scan_base, scan_excludes, scan_readme_name, show_excludes,
};

/// The check command implementation.
pub struct CheckCommand {
    settings: Settings,
    args: ScanArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: Settings, args: ScanArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let base = scan_base(&self.settings, &self.args);
        let readme_name = scan_readme_name(&self.settings, &self.args);
        let excludes = scan_excludes(&self.settings, &self.args.exclude);
        let formatter = self.settings.formatter();

        ui.detail(&format!(
            "Checking {} files under {}",
            readme_name,
            base.display()
        ));
        show_excludes(ui, &excludes);

        let report = check_readmes(&formatter, &base, readme_name, &excludes)?;

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?);
        } else if report.all_up_to_date() {
            ui.success(&format!(
                "{} generated {} up to date",
                report.checked,
                readmes(report.checked)
            ));
        } else {
            for path in &report.stale {
                ui.warning(&format!(
                    "{} is out of date",
                    display_path(&self.settings.project_root, path)
                ));
            }
            ui.error(&format!(
                "{} of {} generated {} out of date",
                report.stale.len(),
                report.checked,
                readmes(report.checked)
            ));
        }

        Ok(if report.all_up_to_date() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
