//! Axum [`extractor`](axum::extract) for the `trackerName` query parameter.
//!
//! It's used by the `GET` (record a hit) and `POST` (get the tracker data)
//! handlers.
//!
//! **Sample request**
//!
//! <http://0.0.0.0:7070/tracker?trackerName=campaign1>
//!
//! It returns a `400` [`Error`](crate::servers::http::v1::responses::error)
//! response if the parameter is missing or empty:
//!
//! ```json
//! {"error":"trackerName query parameter is required"}
//! ```
//!
//! The parameter value is percent-decoded. If it's repeated, the first value
//! is used.
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use crate::servers::http::v1::responses;

/// Name of the query parameter with the tracker name.
pub const TRACKER_NAME_PARAM: &str = "trackerName";

/// Extractor for the tracker name.
pub struct ExtractTrackerName(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ExtractTrackerName
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match extract_tracker_name_from(parts.uri.query()) {
            Ok(tracker_name) => Ok(ExtractTrackerName(tracker_name)),
            Err(error) => Err(error.into_response()),
        }
    }
}

fn extract_tracker_name_from(maybe_raw_query: Option<&str>) -> Result<String, responses::error::Error> {
    let Some(raw_query) = maybe_raw_query else {
        return Err(responses::error::Error::MissingTrackerName);
    };

    url::form_urlencoded::parse(raw_query.as_bytes())
        .find(|(name, _)| name == TRACKER_NAME_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|tracker_name| !tracker_name.is_empty())
        .ok_or(responses::error::Error::MissingTrackerName)
}
