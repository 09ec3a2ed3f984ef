//! In-memory tracking data.
//!
//! The [`TrackingStore`] maps tracker names to their [`TrackerRecord`]. Each
//! record keeps the hits in the order they were recorded. Hits are never
//! removed or reordered.
//!
//! The serialized form is the one persisted by the
//! [`JsonFile`](crate::core::storage::json_file::JsonFile) storage and
//! returned by the HTTP server:
//!
//! ```json
//! {
//!   "campaign1": {
//!     "trackerName": "campaign1",
//!     "hits": [
//!       {
//!         "time": "2024-05-01T10:20:30.456Z",
//!         "ip": "203.0.113.195"
//!       }
//!     ]
//!   }
//! }
//! ```
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One recorded visit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// ISO 8601 timestamp, for example `2024-05-01T10:20:30.456Z`.
    pub time: String,
    /// The origin address of the visitor or `unknown`.
    pub ip: String,
}

impl Hit {
    #[must_use]
    pub fn new(time: &str, ip: &str) -> Self {
        Self {
            time: time.to_string(),
            ip: ip.to_string(),
        }
    }
}

/// All the hits for one tracker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerRecord {
    pub tracker_name: String,
    pub hits: Vec<Hit>,
}

impl TrackerRecord {
    /// A record with only the first hit.
    #[must_use]
    pub fn new(tracker_name: &str, first_hit: Hit) -> Self {
        Self {
            tracker_name: tracker_name.to_string(),
            hits: vec![first_hit],
        }
    }
}

/// The tracking data: tracker name -> record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct TrackingStore {
    records: BTreeMap<String, TrackerRecord>,
}

impl TrackingStore {
    /// It appends the hit to the tracker record, creating the record if this
    /// is the first hit for the tracker. It returns the updated record.
    pub fn record_hit(&mut self, tracker_name: &str, hit: Hit) -> &TrackerRecord {
        self.records
            .entry(tracker_name.to_string())
            .and_modify(|record| record.hits.push(hit.clone()))
            .or_insert_with(|| TrackerRecord::new(tracker_name, hit))
    }

    #[must_use]
    pub fn get(&self, tracker_name: &str) -> Option<&TrackerRecord> {
        self.records.get(tracker_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// It makes every record name match the key it is stored under. It
    /// returns the names of the records that had to be fixed.
    ///
    /// Data written by this service is always consistent, but the file could
    /// have been edited by hand.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut fixed = vec![];

        for (key, record) in &mut self.records {
            if record.tracker_name != *key {
                record.tracker_name.clone_from(key);
                fixed.push(key.clone());
            }
        }

        fixed
    }
}
