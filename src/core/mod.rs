//! The core `tracker` module contains the generic pixel tracker logic which is
//! independent of the delivery layer.
//!
//! It contains the tracker services and their dependencies. It's a domain
//! layer which does not specify how the end user should connect to the
//! `Tracker`.
//!
//! Typically this module is intended to be used by higher modules like:
//!
//! - An HTTP server that serves the tracking pixel
//! - A bootstrap routine that loads the persisted tracking data
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!     HTTP tracker |
//!                  |> Core tracker
//!        Bootstrap |
//! ```
//!
//! # Table of contents
//!
//! - [Tracker](#tracker)
//! - [Hits](#hits)
//! - [Tracker records](#tracker-records)
//! - [Persistence](#persistence)
//!
//! # Tracker
//!
//! The `Tracker` is the main struct in this module. It holds the tracking
//! data in memory and the storage where the data is persisted.
//!
//! ```rust,no_run
//! use pixel_tracker::core::services::tracker_factory;
//! use pixel_tracker_configuration::Configuration;
//!
//! let tracker = tracker_factory(&Configuration::default());
//! ```
//!
//! # Hits
//!
//! A hit is one request for the tracking pixel. The tracker stamps it with
//! the current time and stores it with the origin address resolved by the
//! delivery layer:
//!
//! ```text
//! let recorded = tracker.record_hit("campaign1", "203.0.113.195").await;
//! ```
//!
//! The hit is appended to the record in memory first and then the whole
//! tracking data is persisted. A persistence failure does not undo the
//! in-memory append. It's reported in the [`RecordedHit`] so the caller can
//! decide what to do with it.
//!
//! # Tracker records
//!
//! Every tracker with at least one hit has a [`TrackerRecord`](crate::core::store::TrackerRecord):
//!
//! ```text
//! pub struct TrackerRecord {
//!     pub tracker_name: String,
//!     pub hits: Vec<Hit>,
//! }
//!
//! pub struct Hit {
//!     pub time: String,
//!     pub ip: String,
//! }
//! ```
//!
//! A tracker without hits has no record at all.
//!
//! # Persistence
//!
//! The `Tracker` is responsible for loading the tracking data on startup and
//! saving it after every hit.
//!
//! Refer to [`storage`] module for more information about persistence.
pub mod services;
pub mod storage;
pub mod store;

use std::sync::Arc;

use pixel_tracker_configuration::Configuration;
use tokio::sync::RwLock;

use self::storage::Storage;
use self::store::{Hit, TrackerRecord, TrackingStore};
use crate::shared::clock::conv::convert_from_timestamp_to_iso_8601;
use crate::shared::clock::Time;
use crate::CurrentClock;

/// The domain layer tracker service.
///
/// Its main responsibility is to record hits and return the tracker records.
///
/// > **NOTICE**: the `Tracker` is not responsible for handling the network
/// layer. The origin address of a hit is resolved by the delivery layer.
pub struct Tracker {
    /// The persistence for the tracking data: [`JsonFile`](crate::core::storage::json_file::JsonFile)
    pub storage: Arc<Box<dyn Storage>>,
    store: RwLock<TrackingStore>,
}

/// Structure that holds the data returned by the `record_hit` operation.
#[derive(Debug, Clone)]
pub struct RecordedHit {
    /// The tracker record including the new hit.
    pub record: TrackerRecord,
    /// The outcome of persisting the tracking data after the hit.
    pub persistence: Result<(), storage::error::Error>,
}

impl RecordedHit {
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.persistence.is_ok()
    }
}

impl Tracker {
    /// `Tracker` constructor. It uses the storage in the configuration.
    ///
    /// The tracking data is not loaded until [`Tracker::load_tracking_data_from_storage`]
    /// is called.
    #[must_use]
    pub fn new(config: &Configuration) -> Tracker {
        Self::with_storage(storage::build(&config.storage.path))
    }

    #[must_use]
    pub fn with_storage(storage: Box<dyn Storage>) -> Tracker {
        Tracker {
            storage: Arc::new(storage),
            store: RwLock::new(TrackingStore::default()),
        }
    }

    /// It records a hit for the tracker.
    ///
    /// The write lock is held until the data has been persisted, so
    /// concurrent hits are appended and persisted one after the other and no
    /// hit is lost.
    pub async fn record_hit(&self, tracker_name: &str, ip: &str) -> RecordedHit {
        let time = convert_from_timestamp_to_iso_8601(CurrentClock::now());

        let mut store = self.store.write().await;

        let record = store.record_hit(tracker_name, Hit::new(&time, ip)).clone();

        let persistence = self.storage.save(&store);

        if let Err(err) = &persistence {
            tracing::error!(target: "TRACKER", %tracker_name, %err, "unable to persist the tracking data");
        }

        RecordedHit { record, persistence }
    }

    /// It returns the record for the tracker, if the tracker has any hit.
    pub async fn get_record(&self, tracker_name: &str) -> Option<TrackerRecord> {
        self.store.read().await.get(tracker_name).cloned()
    }

    /// Number of trackers with at least one hit.
    pub async fn number_of_trackers(&self) -> usize {
        self.store.read().await.len()
    }

    /// It loads the tracking data from the storage, replacing the data in
    /// memory.
    ///
    /// # Errors
    ///
    /// Will return a `storage::error::Error` if the persisted data can not be
    /// read or parsed. The data in memory is left untouched.
    pub async fn load_tracking_data_from_storage(&self) -> Result<(), storage::error::Error> {
        let loaded = self.storage.load()?;

        *self.store.write().await = loaded;

        Ok(())
    }
}
