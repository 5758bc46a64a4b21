//! Verifying every generated README in a tree.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::render::DocRenderer;

use super::format::ReadmeFormatter;
use super::scan::find_readmes;
use super::verify::verify_readme;

/// Outcome of checking the generated READMEs under a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Number of generated READMEs that were verified.
    pub checked: usize,
    /// READMEs whose content no longer matches their package.
    pub stale: Vec<PathBuf>,
}

impl CheckReport {
    /// True when no stale README was found.
    pub fn all_up_to_date(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Check that every generated README under `base_path` is up to date.
///
/// The first scan or verification error aborts the check; no partial
/// report is returned.
pub fn check_readmes<R: DocRenderer, P: AsRef<Path>>(
    formatter: &ReadmeFormatter<R>,
    base_path: &Path,
    readme_name: &str,
    exclude_dirs: &[P],
) -> Result<CheckReport> {
    let readmes = find_readmes(base_path, readme_name, exclude_dirs)?;

    let mut report = CheckReport::default();
    for (path, pkg) in readmes {
        let ok = verify_readme(formatter, &pkg, &path)?;
        report.checked += 1;
        if !ok {
            tracing::debug!("{} is out of date for {}", path.display(), pkg);
            report.stale.push(path);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GoreadmeError;
    use crate::readme::write_readme;
    use crate::render::RenderConfig;
    use std::fs;
    use tempfile::TempDir;

    fn docs(pkgs: &[&str], _: &RenderConfig) -> Result<String> {
        Ok(format!("# {}\n", pkgs[0]))
    }

    #[test]
    fn reports_stale_files() {
        let temp = TempDir::new().unwrap();
        let formatter = ReadmeFormatter::new(docs);
        let fresh = temp.path().join("fresh");
        let stale = temp.path().join("stale");
        fs::create_dir_all(&fresh).unwrap();
        fs::create_dir_all(&stale).unwrap();

        write_readme(&formatter, "fresh", &fresh.join("README.md")).unwrap();
        fs::write(
            stale.join("README.md"),
            "# old docs\n\n<!--- generated by goreadme for stale-->\n",
        )
        .unwrap();

        let report = check_readmes::<_, &Path>(&formatter, temp.path(), "README.md", &[]).unwrap();

        assert!(!report.all_up_to_date());
        assert_eq!(report.checked, 2);
        assert_eq!(report.stale, vec![stale.join("README.md")]);
    }

    #[test]
    fn all_fresh() {
        let temp = TempDir::new().unwrap();
        let formatter = ReadmeFormatter::new(docs);
        write_readme(&formatter, "p", &temp.path().join("README.md")).unwrap();

        let report = check_readmes::<_, &Path>(&formatter, temp.path(), "README.md", &[]).unwrap();

        assert!(report.all_up_to_date());
        assert_eq!(report.checked, 1);
    }

    #[test]
    fn empty_tree_is_up_to_date() {
        let temp = TempDir::new().unwrap();
        let formatter = ReadmeFormatter::new(docs);

        let report = check_readmes::<_, &Path>(&formatter, temp.path(), "README.md", &[]).unwrap();

        assert!(report.all_up_to_date());
        assert_eq!(report.checked, 0);
    }

    #[test]
    fn excluded_stale_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        let formatter = ReadmeFormatter::new(docs);
        let vendor = temp.path().join("vendor");
        fs::create_dir_all(&vendor).unwrap();
        fs::write(
            vendor.join("README.md"),
            "<!--- generated by goreadme for v-->\n",
        )
        .unwrap();

        let report = check_readmes(&formatter, temp.path(), "README.md", &[vendor]).unwrap();

        assert!(report.all_up_to_date());
    }

    #[test]
    fn render_error_aborts_check() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("README.md"),
            "<!--- generated by goreadme for p-->\n",
        )
        .unwrap();
        let formatter = ReadmeFormatter::new(|_: &[&str], _: &RenderConfig| -> Result<String> {
            Err(GoreadmeError::Render {
                package: "p".into(),
                message: "boom".into(),
            })
        });

        let err = check_readmes::<_, &Path>(&formatter, temp.path(), "README.md", &[]).unwrap_err();

        assert!(matches!(err, GoreadmeError::Render { .. }));
    }

    #[test]
    fn scan_error_aborts_check() {
        let temp = TempDir::new().unwrap();
        let formatter = ReadmeFormatter::new(docs);

        let err =
            check_readmes::<_, &Path>(&formatter, &temp.path().join("nope"), "README.md", &[])
                .unwrap_err();

        assert!(matches!(err, GoreadmeError::Io(_)));
    }
}
