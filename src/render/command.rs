//! External renderer program execution.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{GoreadmeError, Result};

use super::{DocRenderer, RenderConfig};

/// Renderer program used when none is configured.
pub const DEFAULT_RENDERER: &str = "godoc2md";

/// Renders documentation by running an external program and capturing stdout.
///
/// The program is invoked as
/// `<program> [args] -tabwidth=N -declinks=B [-goroot=ROOT] -srclinkhashfmt=FMT <pkg>...`.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER)
    }
}

impl CommandRenderer {
    /// Create a renderer running `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Extra arguments placed before the generated flags.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Run the program in `cwd` instead of the current directory.
    pub fn with_cwd(mut self, cwd: &Path) -> Self {
        self.cwd = Some(cwd.to_path_buf());
        self
    }

    /// Get the program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the full argument list for one invocation.
    pub fn command_args(&self, packages: &[&str], config: &RenderConfig) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(format!("-tabwidth={}", config.tab_width));
        args.push(format!("-declinks={}", config.decl_links));
        if !config.root_path.is_empty() {
            args.push(format!("-goroot={}", config.root_path));
        }
        args.push(format!("-srclinkhashfmt={}", config.line_anchor_format));
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }
}

impl DocRenderer for CommandRenderer {
    fn render(&self, packages: &[&str], config: &RenderConfig) -> Result<String> {
        let start = Instant::now();
        let args = self.command_args(packages, config);
        let package = packages.join(" ");

        let mut cmd = Command::new(&self.program);
        cmd.args(&args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::null());

        tracing::debug!("Running renderer: {} {}", self.program, args.join(" "));

        let output = cmd.output().map_err(|e| GoreadmeError::Render {
            package: package.clone(),
            message: format!("failed to run {}: {}", self.program, e),
        })?;

        tracing::debug!(
            "Renderer exited with {:?} after {:?}",
            output.status.code(),
            start.elapsed()
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{} exited with code {:?}", self.program, output.status.code())
            } else {
                stderr
            };
            return Err(GoreadmeError::Render { package, message });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
