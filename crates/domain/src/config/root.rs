use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordEntry;
use super::server::ServerConfig;
use crate::record::RecordTable;

/// Main configuration structure for the IPN DNS stub server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address, transports)
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Record table entries. Empty means the builtin ten-record table.
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ipn-dns.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ipn-dns.toml").exists() {
            Self::from_file("ipn-dns.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(tcp) = overrides.tcp {
            self.server.tcp = tcp;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        for entry in &self.records {
            entry.to_record()?;
        }

        Ok(())
    }

    /// Build the immutable record table: the configured entries, or the
    /// builtin table when none are configured.
    pub fn record_table(&self) -> Result<RecordTable, ConfigError> {
        if self.records.is_empty() {
            return Ok(RecordTable::builtin());
        }
        let records = self
            .records
            .iter()
            .map(RecordEntry::to_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecordTable::new(records))
    }
}

/// Command-line values that take precedence over file configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub tcp: Option<bool>,
    pub log_level: Option<String>,
}
