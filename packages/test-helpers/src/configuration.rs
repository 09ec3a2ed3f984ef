//! Tracker configuration factories for testing.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use camino::Utf8PathBuf;
use pixel_tracker_configuration::{Configuration, Threshold};

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one tracker at the same time.
///
/// - The HTTP server binds to a free port chosen by the OS.
/// - Tracking data goes to a new file in the system temp dir.
/// - Logging is disabled.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to an UTF-8 path.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for the HTTP server
    config.http_tracker.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    // Ephemeral storage file
    config.storage.path = ephemeral_storage_path();

    config
}

/// Ephemeral configuration where the storage path points to a directory, so
/// tracking data can neither be loaded nor persisted.
///
/// # Panics
///
/// Will panic if it can't create the directory or the temp dir is not an
/// UTF-8 path.
#[must_use]
pub fn ephemeral_with_unwritable_storage() -> Configuration {
    let mut config = ephemeral();

    let directory = env::temp_dir().join(format!("pixel_tracker_dir_{}", random::string(16)));

    std::fs::create_dir_all(&directory).expect("it should create the storage directory");

    config.storage.path = Utf8PathBuf::from_path_buf(directory).expect("temp dir should be an UTF-8 path");

    config
}

/// A new random path in the system temp dir for a tracking data file. The file
/// does not exist yet.
///
/// # Panics
///
/// Will panic if the temp dir is not an UTF-8 path.
#[must_use]
pub fn ephemeral_storage_path() -> Utf8PathBuf {
    let temp_file = env::temp_dir().join(format!("tracking_data_{}.json", random::string(16)));

    Utf8PathBuf::from_path_buf(temp_file).expect("temp dir should be an UTF-8 path")
}
