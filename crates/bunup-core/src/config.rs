use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::substitute::DEFAULT_IGNORE;

/// Where templates are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TemplateSource {
    /// Shallow sparse checkout of a GitHub repository.
    Github {
        #[serde(default = "default_repository")]
        repository: String,
        #[serde(default = "default_reference")]
        reference: String,
    },
    /// A directory on disk holding one sub-directory per template.
    Local { path: PathBuf },
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self::Github {
            repository: default_repository(),
            reference: default_reference(),
        }
    }
}

fn default_repository() -> String {
    "bunup/templates".to_string()
}

fn default_reference() -> String {
    "main".to_string()
}

/// Settings of the `bunup` binary.
///
/// Read from `create.yaml` under the user configuration directory. Every field
/// has a default, so an absent or partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub template_source: TemplateSource,
    /// Program used for the install and build steps.
    pub package_manager: String,
    pub install: bool,
    pub build: bool,
    /// Path components skipped when substituting file contents.
    pub ignore: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            template_source: TemplateSource::default(),
            package_manager: "bun".to_string(),
            install: true,
            build: true,
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Reads a YAML configuration file, returning defaults when it does not exist.
///
/// # Errors
/// The file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> anyhow::Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
    if content.trim().is_empty() {
        return Ok(CliConfig::default());
    }
    let config: CliConfig = serde_yaml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))?;
    Ok(config)
}
