//! goreadme - README.md files generated from package documentation.
//!
//! goreadme renders a package's documentation to Markdown through an
//! external renderer, rewrites source links to be relative, and stamps the
//! result with a marker naming the package. The marker lets later runs find
//! every generated README in a tree and check that it is still current.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.goreadme.yml` loading and setting resolution
//! - [`error`] - Error types and result aliases
//! - [`readme`] - README formatting, writing, verification, and discovery
//! - [`render`] - Documentation renderer seam and the external program renderer
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use goreadme::readme::{readme_package, ReadmeFormatter};
//! use goreadme::render::RenderConfig;
//!
//! let formatter = ReadmeFormatter::new(|_: &[&str], _: &RenderConfig| -> goreadme::Result<String> {
//!     Ok("See [main.go](/src/target/main.go#L10).\n".to_string())
//! });
//! let content = formatter.format("example.com/cmd").unwrap();
//!
//! assert!(content.starts_with("See [main.go](./main.go#L10)."));
//! assert_eq!(readme_package(content.as_bytes()).as_deref(), Some("example.com/cmd"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod readme;
pub mod render;
pub mod ui;

pub use error::{GoreadmeError, Result};
