//! Configuration directory and persistent settings

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::args::OutputFormat;
use crate::simulation::AcceptingPolicy;

/// Get the configuration directory for kmp-automaton
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("kmp-automaton"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default accepting policy
    pub policy: Option<AcceptingPolicy>,
    /// Default output format
    pub format: Option<OutputFormat>,
    /// Colorize text output
    pub color: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from custom path
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        ensure_parent(&path)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        policy: Option<AcceptingPolicy>,
        format: Option<OutputFormat>,
        color: Option<bool>,
    ) -> Self {
        Self {
            policy: policy.or(self.policy),
            format: format.or(self.format),
            color: color.or(self.color),
        }
    }

    /// Effective accepting policy
    pub fn policy(&self) -> AcceptingPolicy {
        self.policy.unwrap_or_default()
    }

    /// Effective output format
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Text)
    }

    /// Whether text output is colorized
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            policy: Some(AcceptingPolicy::Resume),
            format: Some(OutputFormat::Text),
            color: Some(true),
        }
    }
}
