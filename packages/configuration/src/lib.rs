//! Configuration data structures for the Pixel Tracker.
//!
//! The Pixel Tracker is a tiny HTTP service that serves a transparent 1x1 GIF
//! and records every hit (timestamp and origin address) under a named tracker.
//!
//! The current version for configuration is [`v1`].
pub mod v1;
pub mod validator;

use std::env;
use std::panic::Location;
use std::sync::Arc;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Environment variables

/// The whole `pixel_tracker.toml` file content. It has priority over the
/// config file. Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "PIXEL_TRACKER_CONFIG_TOML";

/// The `pixel_tracker.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "PIXEL_TRACKER_CONFIG_TOML_PATH";

/// Prefix for the environment variables that override single options.
///
/// Nested sections are separated with a double underscore. For example:
/// `PIXEL_TRACKER_CONFIG_OVERRIDE_HTTP_TRACKER__BIND_ADDRESS=0.0.0.0:8080`.
pub const CONFIG_OVERRIDE_PREFIX: &str = "PIXEL_TRACKER_CONFIG_OVERRIDE_";

/// Path separator used in the override environment variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type HttpTracker = v1::http_tracker::HttpTracker;
pub type Logging = v1::logging::Logging;
pub type Storage = v1::storage::Storage;
pub type Threshold = v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// The TOML content in the `PIXEL_TRACKER_CONFIG_TOML` env var has
    /// priority over the file path. The file path defaults to
    /// `default_config_toml_path` unless the `PIXEL_TRACKER_CONFIG_TOML_PATH`
    /// env var is set.
    #[must_use]
    pub fn new(default_config_toml_path: &str) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path.to_string()
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Figment could not merge or extract the configuration.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Arc<figment::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration could not be encoded.
    #[error("Unable to encode the configuration: {message}, {location}")]
    UnableToEncode {
        message: String,
        location: &'static Location<'static>,
    },

    /// The configuration file could not be written.
    #[error("Unable to write the configuration file {path}: {source}, {location}")]
    UnableToWriteFile {
        path: String,
        source: Arc<std::io::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration was parsed but some options do not make sense together.
    #[error("Invalid configuration: {source}")]
    Invalid { source: validator::SemanticValidationError },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}

/// TLS configuration for the HTTP tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct TslConfig {
    /// Path to the SSL certificate file.
    #[serde(default = "TslConfig::default_ssl_cert_path")]
    pub ssl_cert_path: Utf8PathBuf,

    /// Path to the SSL key file.
    #[serde(default = "TslConfig::default_ssl_key_path")]
    pub ssl_key_path: Utf8PathBuf,
}

impl TslConfig {
    fn default_ssl_cert_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }

    fn default_ssl_key_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }
}
