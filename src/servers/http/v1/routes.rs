//! HTTP server routes for version `v1`.
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, Request};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};

use super::handlers::{health_check, method_not_allowed, pixel, tracker_data};
use crate::core::Tracker;

/// Path of the tracker endpoint.
pub const TRACKER_PATH: &str = "/tracker";

/// Path of the health check endpoint.
pub const HEALTH_CHECK_PATH: &str = "/health_check";

/// It adds the routes to the router.
///
/// The tracker endpoint only accepts `GET` and `POST`. Any other method,
/// `HEAD` included, gets a `405` JSON error.
#[allow(clippy::needless_pass_by_value)]
pub fn router(tracker: Arc<Tracker>, server_socket_addr: SocketAddr) -> Router {
    Router::new()
        // Health check
        .route(HEALTH_CHECK_PATH, get(health_check::handler))
        // Tracker: record a hit (GET) or get the tracker data (POST)
        .route(
            TRACKER_PATH,
            get(pixel::handle)
                .post(tracker_data::handle)
                .head(method_not_allowed::handle)
                .fallback(method_not_allowed::handle),
        )
        .with_state(tracker)
        .layer(CompressionLayer::new())
        .layer(PropagateHeaderLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(move |request: &Request<axum::body::Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();

                    tracing::info!(
                        target: "HTTP TRACKER",
                        server_socket_addr = %server_socket_addr, method = %method, uri = %uri, request_id = %request_id, "request");
                })
                .on_response(move |response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = response
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();
                    let latency_ms = latency.as_millis();

                    tracing::info!(
                        target: "HTTP TRACKER",
                        server_socket_addr = %server_socket_addr, latency = %latency_ms, status = %status_code, request_id = %request_id, "response");
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
