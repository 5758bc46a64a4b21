//! Configuration file discovery and loading.

use crate::config::schema::GoreadmeConfig;
use crate::error::{GoreadmeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".goreadme.yml";

/// Find the project config at `<project_root>/.goreadme.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.goreadme.yml` (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GoreadmeConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GoreadmeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GoreadmeError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`GoreadmeConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GoreadmeConfig> {
    if content.trim().is_empty() {
        return Ok(GoreadmeConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GoreadmeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Without one, the project
/// config is used when present and defaults apply otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<GoreadmeConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(GoreadmeConfig::default()),
    }
}
