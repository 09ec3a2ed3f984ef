//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `PIXEL_TRACKER_`.
use pixel_tracker_configuration::{Configuration, Error, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/pixel_tracker.development.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `pixel_tracker.toml`. The path can be changed
///    with the `PIXEL_TRACKER_CONFIG_TOML_PATH` environment variable.
/// 2. Environment variable: `PIXEL_TRACKER_CONFIG_TOML`. The variable contains
///    the same contents as the `pixel_tracker.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](pixel_tracker_configuration) for
/// the configuration options.
///
/// # Errors
///
/// Will return an error if the configuration can not be loaded from either
/// the config file or the env var `PIXEL_TRACKER_CONFIG_TOML`, or if it's not
/// valid.
pub fn initialize_configuration() -> Result<Configuration, Error> {
    let info = Info::new(DEFAULT_PATH_CONFIG);

    Configuration::load(&info)
}
