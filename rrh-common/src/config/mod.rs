//! Configuration for the rrh tools.
//!
//! Values are layered, later layers winning:
//! - built-in defaults
//! - `config.toml` (`$XDG_CONFIG_HOME/rrh/config.toml` or `--config`)
//! - `RRH_*` environment variables
//!
//! Each resolved value remembers its [`ConfigSource`] so `rrh config` can
//! explain where it came from.

pub mod env;
pub mod source;

pub use env::{EnvError, EnvParser};
pub use source::{ConfigSource, Sourced};

use crate::errors::ErrorCode;
use crate::logging::{LogConfig, LogFormat, LoggingError, parse_filter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Rendering of command output on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid general.log_level in {}: {source}", path.display())]
    InvalidLogLevel {
        path: PathBuf,
        #[source]
        source: LoggingError,
    },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } => ErrorCode::ConfigReadError,
            Self::Parse { .. } => ErrorCode::ConfigParseError,
            Self::InvalidLogLevel { .. } => ErrorCode::ConfigValueError,
        }
    }
}

/// On-disk layout of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeneralSection {
    log_level: Option<String>,
    log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    format: Option<OutputFormat>,
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RrhConfig {
    pub log_level: Sourced<String>,
    pub log_format: Sourced<LogFormat>,
    pub output_format: Sourced<OutputFormat>,
}

impl Default for RrhConfig {
    fn default() -> Self {
        Self::resolve(ConfigFile::default(), &mut EnvParser::new())
    }
}

impl RrhConfig {
    fn resolve(file: ConfigFile, parser: &mut EnvParser) -> Self {
        let log_level = parser.get_log_level(
            "LOG_LEVEL",
            Sourced::file_or_default(file.general.log_level, "warn".to_string()),
        );
        let log_format = parser.get_parsed(
            "LOG_FORMAT",
            "text or json",
            Sourced::file_or_default(file.general.log_format, LogFormat::default()),
        );
        let output_format = parser.get_parsed(
            "OUTPUT_FORMAT",
            "text or json",
            Sourced::file_or_default(file.output.format, OutputFormat::default()),
        );

        Self {
            log_level,
            log_format,
            output_format,
        }
    }

    /// Subscriber settings for these values.
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.log_level.value.clone()).with_format(self.log_format.value)
    }
}

/// Configuration together with environment problems that were skipped.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: RrhConfig,
    /// File that was read, if any.
    pub path: Option<PathBuf>,
    pub env_errors: Vec<EnvError>,
}

/// Default location of `config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rrh").join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is used
/// when present and skipped otherwise.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path().filter(|p| p.is_file()),
    };

    let file = match &path {
        Some(p) => read_config_file(p)?,
        None => ConfigFile::default(),
    };

    let mut parser = EnvParser::new();
    let config = RrhConfig::resolve(file, &mut parser);
    let env_errors = parser.take_errors();

    debug!(path = ?path, env_errors = env_errors.len(), "Loaded configuration");

    Ok(LoadedConfig {
        config,
        path,
        env_errors,
    })
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(level) = &file.general.log_level {
        parse_filter(level).map_err(|source| ConfigError::InvalidLogLevel {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(file)
}

#[cfg(test)]
pub(crate) fn env_test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
