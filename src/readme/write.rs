//! Writing generated READMEs to disk.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::render::DocRenderer;

use super::format::ReadmeFormatter;

/// Generate the README for `pkg` and write it to `path`.
///
/// The content is rendered before the file is opened, so a renderer failure
/// leaves an existing README untouched. The file is created if missing and
/// truncated otherwise.
pub fn write_readme<R: DocRenderer>(
    formatter: &ReadmeFormatter<R>,
    pkg: &str,
    path: &Path,
) -> Result<()> {
    let content = formatter.format(pkg)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o640);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    file.sync_all()?;

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GoreadmeError;
    use crate::render::RenderConfig;
    use std::fs;
    use tempfile::TempDir;

    fn docs(_: &[&str], _: &RenderConfig) -> Result<String> {
        Ok("# Docs\n".to_string())
    }

    fn failing(pkgs: &[&str], _: &RenderConfig) -> Result<String> {
        Err(GoreadmeError::Render {
            package: pkgs.join(" "),
            message: "boom".into(),
        })
    }

    #[test]
    fn creates_new_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        let formatter = ReadmeFormatter::new(docs);

        write_readme(&formatter, "p", &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, formatter.format("p").unwrap());
    }

    #[test]
    fn truncates_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "x".repeat(4096)).unwrap();
        let formatter = ReadmeFormatter::new(docs);

        write_readme(&formatter, "p", &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, formatter.format("p").unwrap());
    }

    #[test]
    fn render_failure_leaves_existing_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "hand-written").unwrap();
        let formatter = ReadmeFormatter::new(failing);

        let err = write_readme(&formatter, "p", &path).unwrap_err();

        assert!(matches!(err, GoreadmeError::Render { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand-written");
    }

    #[test]
    fn render_failure_does_not_create_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        let formatter = ReadmeFormatter::new(failing);

        assert!(write_readme(&formatter, "p", &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn directory_target_is_io_error() {
        let temp = TempDir::new().unwrap();
        let formatter = ReadmeFormatter::new(docs);

        let err = write_readme(&formatter, "p", temp.path()).unwrap_err();
        assert!(matches!(err, GoreadmeError::Io(_)));
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("README.md");
        let formatter = ReadmeFormatter::new(docs);

        let err = write_readme(&formatter, "p", &path).unwrap_err();
        assert!(matches!(err, GoreadmeError::Io(_)));
    }
}
