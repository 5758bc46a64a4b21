//! Documentation rendering.
//!
//! goreadme does not render documentation itself. A [`DocRenderer`] turns a
//! list of package identifiers into Markdown text; [`CommandRenderer`] does so
//! by running an external renderer program such as `godoc2md`.
//!
//! Any closure with the right signature is also a renderer, which keeps tests
//! free of subprocesses:
//!
//! ```
//! use goreadme::render::{DocRenderer, RenderConfig};
//! use goreadme::Result;
//!
//! let renderer = |pkgs: &[&str], _: &RenderConfig| -> Result<String> {
//!     Ok(format!("# {}\n", pkgs[0]))
//! };
//! let md = renderer.render(&["example.com/pkg"], &RenderConfig::default()).unwrap();
//! assert_eq!(md, "# example.com/pkg\n");
//! ```

pub mod command;

pub use command::{CommandRenderer, DEFAULT_RENDERER};

use crate::error::Result;

/// Line anchor format handed to the renderer for source links.
pub const LINE_ANCHOR_FORMAT: &str = "#L%d";

/// Tab width used when rendering code blocks.
pub const TAB_WIDTH: u32 = 4;

/// Settings passed to the renderer with every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Tab width for code blocks.
    pub tab_width: u32,
    /// Emit cross-reference links for declarations.
    pub decl_links: bool,
    /// Root of the language source tree (empty lets the renderer decide).
    pub root_path: String,
    /// printf-style format for line anchors in source links.
    pub line_anchor_format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tab_width: TAB_WIDTH,
            decl_links: true,
            root_path: String::new(),
            line_anchor_format: LINE_ANCHOR_FORMAT.to_string(),
        }
    }
}

impl RenderConfig {
    /// Default settings with the given source root.
    pub fn with_root_path(root_path: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Self::default()
        }
    }
}

/// Converts package identifiers into Markdown documentation.
pub trait DocRenderer {
    /// Render documentation for `packages` as Markdown.
    fn render(&self, packages: &[&str], config: &RenderConfig) -> Result<String>;
}

impl<F> DocRenderer for F
where
    F: Fn(&[&str], &RenderConfig) -> Result<String>,
{
    fn render(&self, packages: &[&str], config: &RenderConfig) -> Result<String> {
        self(packages, config)
    }
}
