use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::updater::DEFAULT_SOURCE_URL;
use crate::utils::error::{JlgError, Result};
use crate::utils::validation::{validate_path, validate_url, Validate};

pub const DEFAULT_CSV_PATH: &str = "data/municipalities.csv";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Optional TOML configuration for the CLI.
///
/// ```toml
/// [data]
/// csv_path = "data/municipalities.csv"
///
/// [source]
/// endpoint = "https://raw.githubusercontent.com/nojimage/local-gov-code-jp/master/index.json"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JlgConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_csv_path() -> String {
    DEFAULT_CSV_PATH.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SOURCE_URL.to_string(),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl JlgConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(JlgError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: JlgConfig =
            toml::from_str(content).map_err(|e| JlgError::InvalidConfigValue {
                field: "config".to_string(),
                value: String::new(),
                reason: format!("TOML parse error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for JlgConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data.csv_path", &self.data.csv_path)?;
        validate_url("source.endpoint", &self.source.endpoint)?;
        Ok(())
    }
}
