//! `Error` response for the [`HTTP tracker`](crate::servers::http).
//!
//! Data structures and logic to build the error responses.
//!
//! Errors are returned as a JSON object with a single `error` field that
//! explains why the request failed:
//!
//! ```json
//! {"error":"trackerName query parameter is required"}
//! ```
//!
//! Failures to persist the tracking data are not errors for the client. They
//! are reported by the [`Pixel`](crate::servers::http::v1::responses::pixel::Pixel)
//! response.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned to the client by the HTTP tracker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The `trackerName` query parameter is missing or empty.
    #[error("trackerName query parameter is required")]
    MissingTrackerName,

    /// There are no hits for the tracker.
    #[error("No data found for the specified trackerName")]
    TrackerNotFound,

    /// The HTTP method is not `GET` nor `POST`.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl Error {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingTrackerName => StatusCode::BAD_REQUEST,
            Error::TrackerNotFound => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Returns the body of the error response.
    ///
    /// ```rust
    /// use pixel_tracker::servers::http::v1::responses::error::Error;
    ///
    /// let body = Error::TrackerNotFound.body();
    ///
    /// assert_eq!(body.error, "No data found for the specified trackerName");
    /// ```
    #[must_use]
    pub fn body(&self) -> Body {
        Body { error: self.to_string() }
    }
}

/// JSON body of the error responses.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Body {
    /// Human readable string which explains why the request failed.
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
