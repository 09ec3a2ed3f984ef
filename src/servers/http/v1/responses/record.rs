//! `Record` response for the `POST` request.
//!
//! It contains all the hits for one tracker:
//!
//! ```json
//! {
//!   "trackerName": "campaign1",
//!   "hits": [
//!     {
//!       "time": "2024-05-01T10:20:30.456Z",
//!       "ip": "203.0.113.195"
//!     }
//!   ]
//! }
//! ```
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::core::store::TrackerRecord;

/// The tracker data response. The JSON is pretty printed.
#[derive(Debug, PartialEq, Eq)]
pub struct Record(pub TrackerRecord);

impl IntoResponse for Record {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(json) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                json,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(target: "HTTP TRACKER", tracker_name = %self.0.tracker_name, %err, "unable to serialize the tracker record");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
