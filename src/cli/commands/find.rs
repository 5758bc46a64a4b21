//! Find command implementation.
//!
//! The `goreadme find` command lists generated READMEs and the packages
//! they were generated from.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::ScanArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::readme::find_readmes;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{
    display_path, readmes, scan_base, scan_excludes, scan_readme_name, show_excludes,
};

/// A generated README as reported by `find --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundReadme {
    /// Path of the README.
    pub path: PathBuf,
    /// Package recorded in its marker.
    pub package: String,
}

/// The find command implementation.
pub struct FindCommand {
    settings: Settings,
    args: ScanArgs,
}

impl FindCommand {
    /// Create a new find command.
    pub fn new(settings: Settings, args: ScanArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for FindCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let base = scan_base(&self.settings, &self.args);
        let readme_name = scan_readme_name(&self.settings, &self.args);
        let excludes = scan_excludes(&self.settings, &self.args.exclude);
        show_excludes(ui, &excludes);

        let found: Vec<FoundReadme> = find_readmes(&base, readme_name, &excludes)?
            .into_iter()
            .map(|(path, package)| FoundReadme { path, package })
            .collect();

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&found).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        if found.is_empty() {
            ui.message(&format!("No generated {} files found", readme_name));
            return Ok(CommandResult::success());
        }

        for readme in &found {
            ui.data(&format!(
                "{}\t{}",
                display_path(&self.settings.project_root, &readme.path),
                readme.package
            ));
        }
        ui.detail(&format!("{} generated {}", found.len(), readmes(found.len())));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GoreadmeConfig, SettingsOverrides};
    use crate::readme::marker_line;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn settings(root: &Path) -> Settings {
        Settings::resolve(root, GoreadmeConfig::default(), SettingsOverrides::default())
    }

    fn write_marked(dir: &Path, name: &str, pkg: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), format!("# docs\n\n{}\n", marker_line(pkg))).unwrap();
    }

    #[test]
    fn lists_generated_readmes_with_packages() {
        let temp = TempDir::new().unwrap();
        write_marked(&temp.path().join("a"), "README.md", "example.com/a");
        fs::write(temp.path().join("README.md"), "# hand-written\n").unwrap();
        let mut ui = MockUI::new();

        let result = FindCommand::new(settings(temp.path()), ScanArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.data_output().len(), 1);
        assert!(ui.data_output()[0].ends_with("\texample.com/a"));
    }

    #[test]
    fn reports_when_nothing_found() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        FindCommand::new(settings(temp.path()), ScanArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("No generated README.md files found"));
    }

    #[test]
    fn readme_name_override_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        write_marked(temp.path(), "README.MD", "example.com/root");
        let mut ui = MockUI::new();
        let args = ScanArgs {
            readme_name: Some("readme.md".to_string()),
            ..Default::default()
        };

        FindCommand::new(settings(temp.path()), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.data_output().len(), 1);
    }

    #[test]
    fn json_output() {
        let temp = TempDir::new().unwrap();
        write_marked(temp.path(), "README.md", "example.com/root");
        let mut ui = MockUI::new();
        let args = ScanArgs {
            json: true,
            ..Default::default()
        };

        FindCommand::new(settings(temp.path()), args)
            .execute(&mut ui)
            .unwrap();

        let found: serde_json::Value = serde_json::from_str(&ui.data_output()[0]).unwrap();
        assert_eq!(found[0]["package"], "example.com/root");
    }

    #[test]
    fn excluded_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        write_marked(&temp.path().join("vendor"), "README.md", "example.com/v");
        let mut ui = MockUI::new();
        let args = ScanArgs {
            exclude: vec![temp.path().join("vendor")],
            ..Default::default()
        };

        FindCommand::new(settings(temp.path()), args)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.data_output().is_empty());
    }
}
