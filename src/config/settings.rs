//! Effective settings after combining the config file with CLI overrides.

use std::path::{Path, PathBuf};

use crate::config::schema::GoreadmeConfig;
use crate::readme::ReadmeFormatter;
use crate::render::{CommandRenderer, RenderConfig, DEFAULT_RENDERER};

/// Values given on the command line (or through their environment variables).
///
/// `None` leaves the configured value in place.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Renderer program.
    pub renderer: Option<String>,
    /// Source root handed to the renderer.
    pub root_path: Option<String>,
}

/// Settings used by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory relative paths in the config are resolved against.
    pub project_root: PathBuf,
    /// Directory goreadme was run from. Per-package READMEs default to it.
    pub working_dir: PathBuf,
    /// README file name.
    pub readme_name: String,
    /// Excluded directories from the config, joined to the project root.
    pub exclude: Vec<PathBuf>,
    /// Renderer program.
    pub renderer: String,
    /// Extra renderer arguments.
    pub renderer_args: Vec<String>,
    /// Source root handed to the renderer.
    pub root_path: String,
}

impl Settings {
    /// Combine `config` with `overrides`; overrides win.
    pub fn resolve(project_root: &Path, config: GoreadmeConfig, overrides: SettingsOverrides) -> Self {
        let exclude = config
            .exclude
            .iter()
            .map(|dir| project_root.join(dir))
            .collect();

        Self {
            project_root: project_root.to_path_buf(),
            working_dir: project_root.to_path_buf(),
            readme_name: config.readme_name,
            exclude,
            renderer: overrides
                .renderer
                .or(config.renderer.command)
                .unwrap_or_else(|| DEFAULT_RENDERER.to_string()),
            renderer_args: config.renderer.args,
            root_path: overrides
                .root_path
                .or(config.renderer.root_path)
                .unwrap_or_default(),
        }
    }

    /// Use `dir` as the directory goreadme was run from.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// README for a single package: `output` when given, otherwise the
    /// configured file name in the working directory.
    pub fn package_readme(&self, output: Option<&Path>) -> PathBuf {
        match output {
            Some(path) => path.to_path_buf(),
            None => self.working_dir.join(&self.readme_name),
        }
    }

    /// Renderer configured by these settings, run from the project root.
    pub fn command_renderer(&self) -> CommandRenderer {
        CommandRenderer::new(self.renderer.clone())
            .with_args(self.renderer_args.clone())
            .with_cwd(&self.project_root)
    }

    /// Render settings for these settings.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::with_root_path(self.root_path.clone())
    }

    /// README formatter backed by the configured renderer.
    pub fn formatter(&self) -> ReadmeFormatter<CommandRenderer> {
        ReadmeFormatter::with_config(self.command_renderer(), self.render_config())
    }
}
