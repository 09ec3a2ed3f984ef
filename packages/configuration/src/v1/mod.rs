//! Version `1` for the Pixel Tracker configuration data structures.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! (`pixel_tracker.toml`) or from the environment variable
//! `PIXEL_TRACKER_CONFIG_TOML` with the same content as the file. The
//! environment variable has priority over the file.
//!
//! Any single option can be overridden with an environment variable prefixed
//! with `PIXEL_TRACKER_CONFIG_OVERRIDE_`, using `__` to separate nested
//! sections:
//!
//! ```text
//! PIXEL_TRACKER_CONFIG_OVERRIDE_LOGGING__THRESHOLD=debug
//! PIXEL_TRACKER_CONFIG_OVERRIDE_STORAGE__PATH=/var/lib/pixel_tracker/tracking_data.json
//! ```
//!
//! When an option is not provided the default value is used.
//!
//! ## Sections
//!
//! - [`Logging`](crate::v1::logging::Logging)
//! - [`Storage`](crate::v1::storage::Storage)
//! - [`HTTP Tracker`](crate::v1::http_tracker::HttpTracker)
//!
//! ## Port binding
//!
//! You can bind to a random port by using port `0`. For example, if you want
//! to bind to a random port on all interfaces, use `0.0.0.0:0`. The OS will
//! choose a random free port.
//!
//! ## TSL support
//!
//! Add the `[http_tracker.tsl_config]` section with the paths to the
//! certificate and key files to serve the pixel over HTTPS. Alternatively, you
//! could setup a reverse proxy like Nginx to handle the SSL/TLS part. In that
//! case remember to forward the client address in the `X-Forwarded-For`
//! header, otherwise every hit is recorded with the proxy address.
//!
//! ## Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [storage]
//! path = "./storage/pixel_tracker/lib/tracking_data.json"
//!
//! [http_tracker]
//! bind_address = "0.0.0.0:7070"
//! ```
pub mod http_tracker;
pub mod logging;
pub mod storage;

use std::fs;
use std::panic::Location;
use std::sync::Arc;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::http_tracker::HttpTracker;
use self::logging::Logging;
use self::storage::Storage;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the pixel tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Tracking data persistence
    #[serde(default)]
    pub storage: Storage,

    /// The HTTP server
    #[serde(default)]
    pub http_tracker: HttpTracker,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// The TOML content in the `Info` has priority over the TOML file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be parsed or it's not
    /// valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::string(config_toml))
        } else {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(&info.config_toml_path))
        };

        Self::extract(figment)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(path));

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Configuration, Error> {
        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        config.validate().map_err(|source| Error::Invalid { source })?;

        Ok(config)
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded or the file
    /// can not be written.
    #[track_caller]
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        let location = Location::caller();

        let toml = self.to_toml()?;

        fs::write(path, toml).map_err(|err| Error::UnableToWriteFile {
            path: path.to_string(),
            source: Arc::new(err),
            location,
        })
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded.
    #[track_caller]
    pub fn to_toml(&self) -> Result<String, Error> {
        let location = Location::caller();

        toml::to_string(self).map_err(|err| Error::UnableToEncode {
            message: err.to_string(),
            location,
        })
    }

    /// Encodes the configuration to JSON.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded.
    #[track_caller]
    pub fn to_json(&self) -> Result<String, Error> {
        let location = Location::caller();

        serde_json::to_string_pretty(self).map_err(|err| Error::UnableToEncode {
            message: err.to_string(),
            location,
        })
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.storage.path.as_str().is_empty() {
            return Err(SemanticValidationError::EmptyStoragePath);
        }

        if let Some(tsl_config) = &self.http_tracker.tsl_config {
            if tsl_config.ssl_cert_path.as_str().is_empty() || tsl_config.ssl_key_path.as_str().is_empty() {
                return Err(SemanticValidationError::IncompleteTlsSection);
            }
        }

        Ok(())
    }
}
