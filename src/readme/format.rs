//! README content generation.

use std::io::Write;

use crate::error::Result;
use crate::render::{DocRenderer, RenderConfig};

use super::marker::marker_line;

/// Path prefix the renderer uses for the package being documented.
const TARGET_SRC_PREFIX: &str = "/src/target/";

/// Produces README content for a package from a [`DocRenderer`].
///
/// Source links emitted by the renderer are rewritten to be relative to the
/// README, and the provenance marker is appended so the file can later be
/// found and verified.
#[derive(Debug, Clone)]
pub struct ReadmeFormatter<R> {
    renderer: R,
    config: RenderConfig,
}

impl<R: DocRenderer> ReadmeFormatter<R> {
    /// Create a formatter with the default render settings.
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, RenderConfig::default())
    }

    /// Create a formatter with explicit render settings.
    pub fn with_config(renderer: R, config: RenderConfig) -> Self {
        Self { renderer, config }
    }

    /// Render the README content for `pkg`.
    pub fn format(&self, pkg: &str) -> Result<String> {
        let rendered = self.renderer.render(&[pkg], &self.config)?;

        let mut content = rendered
            .replace(TARGET_SRC_PREFIX, "./")
            .replace(&format!("/src/{}/", pkg), "./");
        content.push_str("\n\n");
        content.push_str(&marker_line(pkg));
        content.push('\n');

        Ok(content)
    }

    /// Render the README content for `pkg` into `writer`.
    pub fn write_to<W: Write>(&self, pkg: &str, writer: &mut W) -> Result<()> {
        let content = self.format(pkg)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
