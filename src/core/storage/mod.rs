//! The persistence module.
//!
//! Persistence is implemented with one [`Storage`] trait. The whole tracking
//! data is loaded at once and saved at once. There is only one
//! implementation:
//!
//! - [`JsonFile`](crate::core::storage::json_file::JsonFile)
//!
//! The persisted object is the [`TrackingStore`]:
//!
//! Field         | Sample data                  | Description
//! ---|---|---
//! key           | `campaign1`                  | The tracker name
//! `trackerName` | `campaign1`                  | The tracker name (same as the key)
//! `hits`        | `[{"time": "...", "ip": "..."}]` | Hits in the order they were recorded
//!
//! > **NOTICE**: the file is rewritten completely after every hit. It's meant
//! for small volumes of tracking data.
pub mod error;
pub mod json_file;

use camino::Utf8PathBuf;

use self::error::Error;
use self::json_file::JsonFile;
use crate::core::store::TrackingStore;

/// The persistence trait.
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Sync + Send {
    /// It loads the whole tracking data.
    ///
    /// Storage that was never written is loaded as an empty store.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the existing data can not be read or parsed.
    fn load(&self) -> Result<TrackingStore, Error>;

    /// It replaces the persisted tracking data with `store`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the data can not be encoded or written.
    fn save(&self, store: &TrackingStore) -> Result<(), Error>;
}

/// It builds the storage for the configured path.
#[must_use]
pub fn build(path: &Utf8PathBuf) -> Box<dyn Storage> {
    Box::new(JsonFile::new(path.clone()))
}
