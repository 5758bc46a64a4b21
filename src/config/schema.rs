//! Configuration schema definitions for goreadme.
//!
//! This module contains the struct definitions that map to the
//! `.goreadme.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.goreadme.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoreadmeConfig {
    /// README file name written by `write` and matched by `check`/`find`.
    #[serde(default = "default_readme_name")]
    pub readme_name: String,

    /// Directories skipped during scans, relative to the project root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PathBuf>,

    /// External renderer settings.
    pub renderer: RendererConfig,
}

impl Default for GoreadmeConfig {
    fn default() -> Self {
        Self {
            readme_name: default_readme_name(),
            exclude: Vec::new(),
            renderer: RendererConfig::default(),
        }
    }
}

/// Settings for the external documentation renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Renderer program (defaults to `godoc2md`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Extra arguments passed before the generated flags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Source root handed to the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,
}

fn default_readme_name() -> String {
    "README.md".to_string()
}
