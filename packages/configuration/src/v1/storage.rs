use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Where the tracking data is persisted.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Storage {
    /// Path to the JSON file holding every tracker and its hits. The file is
    /// created on the first recorded hit. A missing file means there is no
    /// tracking data yet.
    #[serde(default = "Storage::default_path")]
    pub path: Utf8PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl Storage {
    fn default_path() -> Utf8PathBuf {
        Utf8PathBuf::from("./storage/pixel_tracker/lib/tracking_data.json")
    }
}
