use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Default UTXO dump for `scan` when `--csv` is not given
    #[serde(default)]
    pub scan_csv: Option<PathBuf>,
    /// Default JSON-lines destination for `scan`; stdout when unset
    #[serde(default)]
    pub scan_output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub progress_interval: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            progress_interval: 100_000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How decoded records are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using `file_stem` (without extension) as the optional config file
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let processing = ProcessingConfig::default();
        let config = Config::builder()
            .set_default(
                "processing.progress_interval",
                processing.progress_interval as i64,
            )?
            .set_default("output.format", "json")?
            .add_source(File::with_name(file_stem).required(false))
            // SENSIBLE_PROCESSING__PROGRESS_INTERVAL, SENSIBLE_PATHS__SCAN_CSV, ...
            .add_source(
                Environment::with_prefix("SENSIBLE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.processing.progress_interval == 0 {
            return Err(ConfigError::Message(
                "processing.progress_interval must be greater than zero".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        // Try to load config for defaults, but don't fail if not found
        Self::load().unwrap_or_else(|_| Self {
            paths: PathsConfig::default(),
            processing: ProcessingConfig::default(),
            output: OutputConfig::default(),
        })
    }
}
