//! Configuration loading for goreadme.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Merging with command-line overrides in [`settings`]
//!
//! # Example
//!
//! ```
//! use goreadme::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".goreadme.yml"), "exclude: [vendor]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.readme_name, "README.md");
//! assert_eq!(config.exclude.len(), 1);
//! ```
//!
//! # Precedence
//!
//! Command-line flags (and their environment variables) override
//! `.goreadme.yml`, which overrides built-in defaults.

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{
    find_project_config, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAME,
};
pub use schema::{GoreadmeConfig, RendererConfig};
pub use settings::{Settings, SettingsOverrides};
