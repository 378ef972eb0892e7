//! Publisher configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::{ConfigError, ConfigResult};

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "eu-central-1";

/// Request timeout used when none is configured
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `[aws]` section
    #[serde(default)]
    pub aws: AwsConfig,
}

/// `[aws]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region the store lives in
    #[serde(default = "default_region")]
    pub region: String,
    /// `[aws.timestream]` section
    #[serde(default)]
    pub timestream: TimestreamConfig,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            timestream: TimestreamConfig::default(),
        }
    }
}

/// `[aws.timestream]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestreamConfig {
    /// Target database (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Target table (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    /// Measurements per batch. Absent or 0 flushes on every send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
    /// Write endpoint, overrides the one derived from the region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Per-request timeout of the HTTP sink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Create a config for the given database table
    pub fn new(database: impl Into<String>, table: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.aws.timestream.database = Some(database.into());
        config.aws.timestream.table = Some(table.into());
        config
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.aws.timestream.batch_size = Some(batch_size);
        self
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.aws.region = region.into();
        self
    }

    /// Set an explicit endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.aws.timestream.endpoint = Some(endpoint.into());
        self
    }

    /// Parse config from a TOML string
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that all required settings are present and usable
    pub fn validate(&self) -> ConfigResult<()> {
        self.database()?;
        self.table()?;
        self.endpoint()?;
        Ok(())
    }

    /// Target database
    pub fn database(&self) -> ConfigResult<&str> {
        non_empty(self.aws.timestream.database.as_deref())
            .ok_or(ConfigError::MissingField("aws.timestream.database"))
    }

    /// Target table
    pub fn table(&self) -> ConfigResult<&str> {
        non_empty(self.aws.timestream.table.as_deref())
            .ok_or(ConfigError::MissingField("aws.timestream.table"))
    }

    /// Configured batch size, `None` when unset
    pub fn batch_size(&self) -> Option<usize> {
        self.aws.timestream.batch_size
    }

    /// Configured region
    pub fn region(&self) -> &str {
        &self.aws.region
    }

    /// Write endpoint: the explicit one, or the regional ingest endpoint
    pub fn endpoint(&self) -> ConfigResult<String> {
        match non_empty(self.aws.timestream.endpoint.as_deref()) {
            Some(endpoint) => {
                if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
                    Ok(endpoint.to_string())
                } else {
                    Err(ConfigError::InvalidEndpoint(endpoint.to_string()))
                }
            }
            None => {
                let region = non_empty(Some(self.region()))
                    .ok_or(ConfigError::MissingField("aws.region"))?;
                Ok(format!("https://ingest.timestream.{}.amazonaws.com", region))
            }
        }
    }

    /// Per-request timeout of the HTTP sink
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.aws
                .timestream
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
