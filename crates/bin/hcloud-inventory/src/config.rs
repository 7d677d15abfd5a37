//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hcloud-inventory.toml` in the working directory unless a path
//! is given on the command line. Every field has a sensible default so the
//! default file is optional. Environment variables take precedence over file
//! values, and command-line flags over both.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use hcloud_inventory_adapter_hcloud::HcloudConfig;
use serde::Deserialize;

use crate::cli::Cli;

/// File looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "hcloud-inventory.toml";

/// Group mapping looked up when none is configured.
pub const DEFAULT_GROUPS_FILE: &str = "groups.yml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hetzner Cloud API settings.
    pub hcloud: HcloudConfig,
    /// Group mapping and policy selection.
    pub groups: GroupsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Which grouping strategy resolves host groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Look the literal host name up in the mapping.
    #[default]
    Static,
    /// Extract a role token from the host name, then look it up.
    Pattern,
}

/// Group mapping configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    /// Mapping file. When unset, [`DEFAULT_GROUPS_FILE`] is used if present.
    pub path: Option<PathBuf>,
    /// Grouping strategy.
    pub policy: PolicyKind,
    /// Naming pattern for the pattern policy (first capture group = token).
    pub pattern: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path` (or the default file, if present)
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, or if an explicitly given
    /// file cannot be read.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(Path::new(DEFAULT_CONFIG_FILE), false)?,
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("HCLOUD_TOKEN") {
            self.hcloud.token = val;
        }
        if let Some(val) = var("HCLOUD_ENDPOINT") {
            self.hcloud.endpoint = val;
        }
        if let Some(val) = var("HCLOUD_INVENTORY_LABEL_SELECTOR") {
            self.hcloud.label_selector = Some(val);
        }
        if let Some(val) = var("HCLOUD_INVENTORY_GROUPS") {
            self.groups.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("HCLOUD_INVENTORY_POLICY") {
            self.groups.policy = PolicyKind::from_str(&val, true).map_err(|_| {
                ConfigError::Validation(format!(
                    "HCLOUD_INVENTORY_POLICY must be `static` or `pattern`, got {val:?}"
                ))
            })?;
        }
        if let Some(val) = var("HCLOUD_INVENTORY_PATTERN") {
            self.groups.pattern = Some(val);
        }
        if let Some(val) = var("HCLOUD_INVENTORY_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    /// Apply command-line flags, which win over file and environment.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.groups {
            self.groups.path = Some(path.clone());
        }
        if let Some(policy) = cli.policy {
            self.groups.policy = policy;
        }
        if let Some(pattern) = &cli.pattern {
            self.groups.pattern = Some(pattern.clone());
        }
    }

    /// Check cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a naming pattern is set but
    /// the static policy is selected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.pattern.is_some() && self.groups.policy == PolicyKind::Static {
            return Err(ConfigError::Validation(
                "a naming pattern requires the pattern policy".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
