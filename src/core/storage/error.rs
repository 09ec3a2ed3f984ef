//! Storage errors.
//!
//! This module contains the [Storage errors](crate::core::storage::error::Error).
use std::panic::Location;
use std::sync::Arc;

use camino::Utf8PathBuf;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The tracking data file exists but it could not be read.
    #[error("Unable to read the tracking data file {path}: {source}, {location}")]
    UnableToRead {
        path: Utf8PathBuf,
        source: Arc<std::io::Error>,
        location: &'static Location<'static>,
    },

    /// The tracking data file content is not valid tracking data.
    #[error("Unable to parse the tracking data file {path}: {source}, {location}")]
    UnableToParse {
        path: Utf8PathBuf,
        source: Arc<serde_json::Error>,
        location: &'static Location<'static>,
    },

    /// The tracking data could not be encoded as JSON.
    #[error("Unable to serialize the tracking data for {path}: {source}, {location}")]
    UnableToSerialize {
        path: Utf8PathBuf,
        source: Arc<serde_json::Error>,
        location: &'static Location<'static>,
    },

    /// The tracking data file (or its parent directory) could not be written.
    #[error("Unable to write the tracking data file {path}: {source}, {location}")]
    UnableToWrite {
        path: Utf8PathBuf,
        source: Arc<std::io::Error>,
        location: &'static Location<'static>,
    },
}

impl Error {
    #[track_caller]
    pub(crate) fn unable_to_read(path: &Utf8PathBuf, err: std::io::Error) -> Self {
        Self::UnableToRead {
            path: path.clone(),
            source: Arc::new(err),
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn unable_to_parse(path: &Utf8PathBuf, err: serde_json::Error) -> Self {
        Self::UnableToParse {
            path: path.clone(),
            source: Arc::new(err),
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn unable_to_serialize(path: &Utf8PathBuf, err: serde_json::Error) -> Self {
        Self::UnableToSerialize {
            path: path.clone(),
            source: Arc::new(err),
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn unable_to_write(path: &Utf8PathBuf, err: std::io::Error) -> Self {
        Self::UnableToWrite {
            path: path.clone(),
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}
