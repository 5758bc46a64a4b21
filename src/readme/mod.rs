//! README generation, verification, and discovery.
//!
//! Every README written by goreadme ends with a marker line naming the
//! package it was generated from:
//!
//! ```text
//! <!--- generated by goreadme for github.com/example/pkg-->
//! ```
//!
//! The marker is the only record of which files goreadme manages. Scans
//! re-derive that set from file content on every run, and checks re-render
//! each package to compare against what is on disk.
//!
//! # Example
//!
//! ```
//! use goreadme::readme::{readme_package, verify_readme, write_readme, ReadmeFormatter};
//! use goreadme::render::RenderConfig;
//! use goreadme::Result;
//! use tempfile::TempDir;
//!
//! let renderer = |pkgs: &[&str], _: &RenderConfig| -> Result<String> {
//!     Ok(format!("# {}\n", pkgs[0]))
//! };
//! let formatter = ReadmeFormatter::new(renderer);
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("README.md");
//! write_readme(&formatter, "example.com/pkg", &path).unwrap();
//!
//! assert!(verify_readme(&formatter, "example.com/pkg", &path).unwrap());
//! let content = std::fs::read(&path).unwrap();
//! assert_eq!(readme_package(&content).as_deref(), Some("example.com/pkg"));
//! ```

pub mod check;
pub mod format;
pub mod marker;
pub mod scan;
pub mod verify;
pub mod write;

pub use check::{check_readmes, CheckReport};
pub use format::ReadmeFormatter;
pub use marker::{marker_line, readme_package};
pub use scan::{absolute_path, find_readmes, ReadmeRegistry};
pub use verify::verify_readme;
pub use write::write_readme;
