//! Axum [`handlers`](axum#handlers) for the `GET` request.
//!
//! Every `GET` request records one hit for the tracker in the `trackerName`
//! query parameter and returns the tracking pixel.
//!
//! The hit is returned to the client even when the tracking data could not be
//! persisted. In that case the response has a `Warning` header.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::core::Tracker;
use crate::servers::http::v1::extractors::client_ip_sources::Extract as ExtractClientIpSources;
use crate::servers::http::v1::extractors::tracker_name::ExtractTrackerName;
use crate::servers::http::v1::responses;
use crate::servers::http::v1::services::origin_address_resolver::{self, ClientIpSources};

/// It handles the `GET` request.
pub async fn handle(
    State(tracker): State<Arc<Tracker>>,
    ExtractTrackerName(tracker_name): ExtractTrackerName,
    ExtractClientIpSources(client_ip_sources): ExtractClientIpSources,
) -> Response {
    debug!(target: "HTTP TRACKER", %tracker_name, ?client_ip_sources, "http hit request");

    handle_hit(&tracker, &tracker_name, &client_ip_sources).await.into_response()
}

async fn handle_hit(tracker: &Arc<Tracker>, tracker_name: &str, client_ip_sources: &ClientIpSources) -> responses::pixel::Pixel {
    let origin_address = origin_address_resolver::invoke(client_ip_sources);

    let recorded = tracker.record_hit(tracker_name, &origin_address).await;

    if recorded.is_persisted() {
        responses::pixel::Pixel::persisted()
    } else {
        responses::pixel::Pixel::not_persisted()
    }
}
