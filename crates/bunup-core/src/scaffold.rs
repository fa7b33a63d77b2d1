use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::CliConfig;
use crate::error::ScaffoldError;
use crate::fetch::TemplateFetcher;
use crate::model::ProjectConfig;
use crate::progress::ProgressEvent;
use crate::runner::CommandRunner;
use crate::substitute::{rename_placeholders, replace_in_files};
use crate::template::resolve_template;
use crate::variables::{extract_package_name, TemplateVariables};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    pub package_manager: String,
    pub install: bool,
    pub build: bool,
    pub ignore: Vec<String>,
}

impl From<&CliConfig> for ScaffoldSettings {
    fn from(config: &CliConfig) -> Self {
        Self {
            package_manager: config.package_manager.clone(),
            install: config.install,
            build: config.build,
            ignore: config.ignore.clone(),
        }
    }
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self::from(&CliConfig::default())
    }
}

/// Directory name of the generated project: the unscoped package name.
pub fn project_dir_name(config: &ProjectConfig) -> &str {
    extract_package_name(&config.project_name)
}

pub fn project_path(config: &ProjectConfig, cwd: &Path) -> PathBuf {
    cwd.join(project_dir_name(config))
}

/// The destination must be missing or an empty directory.
fn ensure_destination_available(path: &Path) -> Result<(), ScaffoldError> {
    if !path.exists() {
        return Ok(());
    }
    let empty_dir = path.is_dir()
        && fs::read_dir(path)
            .map_err(|e| ScaffoldError::io("failed to list", path, e))?
            .next()
            .is_none();
    if empty_dir {
        Ok(())
    } else {
        Err(ScaffoldError::DestinationNotEmpty(path.to_path_buf()))
    }
}

/// Fetch, substitute, install, build.
pub struct Scaffolder<F: TemplateFetcher, R: CommandRunner> {
    fetcher: F,
    runner: R,
    settings: ScaffoldSettings,
}

impl<F: TemplateFetcher, R: CommandRunner> Scaffolder<F, R> {
    pub fn new(fetcher: F, runner: R, settings: ScaffoldSettings) -> Self {
        Self {
            fetcher,
            runner,
            settings,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Creates the project under `cwd` and returns its path.
    ///
    /// Always ends with a [`ProgressEvent::Finished`]. Nothing written before a
    /// failure is cleaned up.
    ///
    /// # Errors
    /// The first failing step.
    pub fn scaffold(
        &self,
        config: &ProjectConfig,
        cwd: &Path,
        on_progress: impl Fn(ProgressEvent),
    ) -> Result<PathBuf, ScaffoldError> {
        let result = self.run_steps(config, cwd, &on_progress);
        on_progress(match &result {
            Ok(_) => ProgressEvent::Finished {
                success: true,
                message: "Project scaffolded successfully!".to_string(),
            },
            Err(_) => ProgressEvent::Finished {
                success: false,
                message: "Failed to scaffold project".to_string(),
            },
        });
        result
    }

    fn run_steps(
        &self,
        config: &ProjectConfig,
        cwd: &Path,
        on_progress: &impl Fn(ProgressEvent),
    ) -> Result<PathBuf, ScaffoldError> {
        let total = 2 + usize::from(self.settings.install) + usize::from(self.settings.build);
        let mut step = 0;
        let mut started = |message: String| {
            step += 1;
            on_progress(ProgressEvent::StepStarted {
                step,
                total,
                message,
            });
        };

        let template = resolve_template(config)?;
        let path = project_path(config, cwd);
        ensure_destination_available(&path)?;

        started(format!("Creating {}...", config.project_name));
        info!(%template, path = %path.display(), "creating project");
        self.fetcher.fetch(template, &path)?;

        started("Applying template variables...".to_string());
        let vars = TemplateVariables::from_config(config);
        let rewritten = replace_in_files(&path, &vars, &self.settings.ignore)?;
        let renamed = rename_placeholders(&path, &vars)?;
        info!(rewritten, renamed, "applied template variables");

        let pm = self.settings.package_manager.as_str();
        if self.settings.install {
            started("Installing dependencies...".to_string());
            self.runner.run(pm, &["install"], &path)?;
        }
        if self.settings.build {
            started("Building project...".to_string());
            self.runner.run(pm, &["run", "build"], &path)?;
        }
        Ok(path)
    }
}
