//! The JSON file implementation of the [`Storage`] trait.
//!
//! The file contains one JSON object with one entry per tracker, pretty printed
//! with two-space indentation.
use std::fs;
use std::io::ErrorKind;

use camino::Utf8PathBuf;
use derive_more::Constructor;

use super::error::Error;
use super::Storage;
use crate::core::store::TrackingStore;

#[derive(Constructor, Debug, Clone)]
pub struct JsonFile {
    path: Utf8PathBuf,
}

impl JsonFile {
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

impl Storage for JsonFile {
    fn load(&self) -> Result<TrackingStore, Error> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(target: "STORAGE", path = %self.path, "no tracking data file yet, starting empty");
                return Ok(TrackingStore::default());
            }
            Err(err) => return Err(Error::unable_to_read(&self.path, err)),
        };

        let mut store: TrackingStore =
            serde_json::from_str(&content).map_err(|err| Error::unable_to_parse(&self.path, err))?;

        for tracker_name in store.normalize() {
            tracing::warn!(target: "STORAGE", path = %self.path, %tracker_name, "record name did not match its key, using the key");
        }

        Ok(store)
    }

    fn save(&self, store: &TrackingStore) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(store).map_err(|err| Error::unable_to_serialize(&self.path, err))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| Error::unable_to_write(&self.path, err))?;
            }
        }

        fs::write(&self.path, json).map_err(|err| Error::unable_to_write(&self.path, err))
    }
}
