//! Shared display helpers for README paths.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::config::Settings;
use crate::ui::UserInterface;

/// Show `path` relative to `root` when it lies below it.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Pluralize "README" for counts.
pub fn readmes(count: usize) -> &'static str {
    if count == 1 {
        "README"
    } else {
        "READMEs"
    }
}

/// Directory a scan starts from: `--base`, or the project root.
pub fn scan_base(settings: &Settings, args: &ScanArgs) -> PathBuf {
    args.base
        .clone()
        .unwrap_or_else(|| settings.project_root.clone())
}

/// README file name a scan matches: `--readme-name`, or the configured one.
pub fn scan_readme_name<'a>(settings: &'a Settings, args: &'a ScanArgs) -> &'a str {
    args.readme_name
        .as_deref()
        .unwrap_or(&settings.readme_name)
}

/// Excluded directories for a scan: configured ones plus those given on the
/// command line.
pub fn scan_excludes(settings: &Settings, extra: &[PathBuf]) -> Vec<PathBuf> {
    settings
        .exclude
        .iter()
        .chain(extra.iter())
        .cloned()
        .collect()
}

/// Report the directories a scan will skip.
pub fn show_excludes(ui: &mut dyn UserInterface, excludes: &[PathBuf]) {
    for dir in excludes {
        ui.detail(&format!("  excluding {}", dir.display()));
    }
}
