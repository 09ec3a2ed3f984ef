//! `Pixel` response for the `GET` request.
//!
//! The body is always the same transparent 1x1 GIF. Caches are told not to
//! store it, so every page view reaches the tracker.
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use hex_literal::hex;

/// The transparent 1x1 GIF served on every hit.
///
/// Base64 encoded: `R0lGODlhAQABAPAAAAAAAAAAACH5BAEAAAAALAAAAAABAAEAAAICRAEAOw==`
pub static TRACKING_PIXEL_GIF: [u8; 43] =
    hex!("47494638396101000100f0000000000000000021f90401000000002c00000000010001000002024401003b");

pub const CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

/// Sent when the hit was recorded in memory but the tracking data could not
/// be saved.
pub const NOT_PERSISTED_WARNING: &str = "199 - \"tracking data could not be persisted\"";

/// The tracking pixel response.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct Pixel {
    /// The hit could not be persisted.
    pub not_persisted: bool,
}

impl Pixel {
    #[must_use]
    pub fn persisted() -> Self {
        Self { not_persisted: false }
    }

    #[must_use]
    pub fn not_persisted() -> Self {
        Self { not_persisted: true }
    }
}

impl IntoResponse for Pixel {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static("image/gif")),
                (header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL)),
            ],
            TRACKING_PIXEL_GIF.as_slice(),
        )
            .into_response();

        if self.not_persisted {
            response.headers_mut().insert(
                HeaderName::from_static("warning"),
                HeaderValue::from_static(NOT_PERSISTED_WARNING),
            );
        }

        response
    }
}
