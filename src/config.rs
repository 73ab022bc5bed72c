//! Configuration management for the bridge reconciler
//!
//! Loads configuration from TOML files with environment variable substitution.

use crate::report::OutputFormat;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "BRIDGE_RECONCILER_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

lazy_static! {
    static ref ENV_VAR_PATTERN: Regex = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// JSON snapshot of the client's transaction history
    pub local_path: PathBuf,
    /// JSON snapshot of the relayer's answer for the same account
    pub relayer_path: PathBuf,
    /// Treat a missing local snapshot as an empty history
    #[serde(default = "default_true")]
    pub allow_missing_local: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub include_outdated: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_outdated: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Print the Prometheus text exposition to stderr after the run
    #[serde(default)]
    pub dump: bool,
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info,bridge_reconciler=debug".to_string()
}

impl Settings {
    /// Load settings from the file named by `BRIDGE_RECONCILER_CONFIG`
    pub fn load() -> Result<Self> {
        let config_path = env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self::load_from(&config_path)
    }

    /// Load settings from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml_str(&config_str)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        // Substitute environment variables
        let config_str = substitute_env_vars(config_str);

        let settings: Settings =
            toml::from_str(&config_str).with_context(|| "Failed to parse configuration")?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.sources.local_path.as_os_str().is_empty() {
            anyhow::bail!("sources.local_path must not be empty");
        }
        if self.sources.relayer_path.as_os_str().is_empty() {
            anyhow::bail!("sources.relayer_path must not be empty");
        }
        if self.sources.local_path == self.sources.relayer_path {
            tracing::warn!(
                "Local and relayer snapshots share path {:?} - every local record will be outdated",
                self.sources.local_path
            );
        }
        if self.metrics.dump && !self.metrics.enabled {
            tracing::warn!("metrics.dump is set but metrics are disabled - nothing will be printed");
        }

        Ok(())
    }
}

/// Substitute environment variables in the format ${VAR_NAME}
fn substitute_env_vars(input: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(input, |cap: &regex::Captures| {
            env::var(&cap[1]).unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_substitution() {
        env::set_var("RECONCILER_TEST_DIR", "/var/lib/bridge");
        let input = "local_path = \"${RECONCILER_TEST_DIR}/local.json\"";
        let result = substitute_env_vars(input);
        assert_eq!(result, "local_path = \"/var/lib/bridge/local.json\"");
    }

    #[test]
    fn test_unset_env_var_becomes_empty() {
        let input = "x = \"${RECONCILER_TEST_SURELY_UNSET}\"";
        assert_eq!(substitute_env_vars(input), "x = \"\"");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [sources]
            local_path = "local.json"
            relayer_path = "relayer.json"
            "#,
        )
        .unwrap();

        assert!(settings.sources.allow_missing_local);
        assert_eq!(settings.output.format, OutputFormat::Pretty);
        assert!(settings.output.include_outdated);
        assert_eq!(settings.logging.filter, "info,bridge_reconciler=debug");
        assert!(!settings.metrics.enabled);
    }

    #[test]
    fn test_full_config() {
        let settings = Settings::from_toml_str(
            r#"
            [sources]
            local_path = "a.json"
            relayer_path = "b.json"
            allow_missing_local = false

            [output]
            format = "summary"
            include_outdated = false

            [logging]
            filter = "warn"
            json = true

            [metrics]
            enabled = true
            dump = true
            "#,
        )
        .unwrap();

        assert!(!settings.sources.allow_missing_local);
        assert_eq!(settings.output.format, OutputFormat::Summary);
        assert!(!settings.output.include_outdated);
        assert!(settings.logging.json);
        assert!(settings.metrics.dump);
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = Settings::from_toml_str(
            r#"
            [sources]
            local_path = ""
            relayer_path = "b.json"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_sources_rejected() {
        assert!(Settings::from_toml_str("[output]\nformat = \"json\"\n").is_err());
    }
}
