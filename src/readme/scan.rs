//! Finding generated READMEs in a directory tree.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

use super::marker::readme_package;

/// Generated READMEs found by a scan, mapped to the package that generated them.
pub type ReadmeRegistry = BTreeMap<PathBuf, String>;

/// Find every generated README under `base_path`.
///
/// Files are matched by name against `readme_name` ignoring ASCII case, and
/// only files carrying a goreadme marker are returned. Directories listed in
/// `exclude_dirs` are compared by absolute path and skipped together with
/// everything below them. Any I/O failure aborts the whole scan.
pub fn find_readmes<P: AsRef<Path>>(
    base_path: &Path,
    readme_name: &str,
    exclude_dirs: &[P],
) -> Result<ReadmeRegistry> {
    let excluded = exclude_dirs
        .iter()
        .map(|dir| absolute_path(dir.as_ref()))
        .collect::<std::io::Result<HashSet<_>>>()?;

    let mut readmes = ReadmeRegistry::new();
    let mut entries = WalkDir::new(base_path).into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry?;

        if entry.file_type().is_dir() {
            if excluded.contains(&absolute_path(entry.path())?) {
                tracing::debug!("Skipping excluded directory {}", entry.path().display());
                entries.skip_current_dir();
            }
            continue;
        }

        if !entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case(readme_name)
        {
            continue;
        }

        let content = fs::read(entry.path())?;
        match readme_package(&content) {
            Some(pkg) => {
                tracing::debug!("Found README for {} at {}", pkg, entry.path().display());
                readmes.insert(entry.into_path(), pkg);
            }
            None => {
                tracing::debug!("Skipping {}: no goreadme marker", entry.path().display());
            }
        }
    }

    Ok(readmes)
}

/// Resolve `path` against the current directory and drop `.` and `..`
/// components without touching the filesystem.
pub fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
