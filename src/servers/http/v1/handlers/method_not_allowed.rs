//! Axum [`handler`](axum#handlers) for every method the tracker endpoint does
//! not support.
//!
//! Only `GET` (record a hit) and `POST` (get the tracker data) are allowed.
//! `HEAD` is rejected too, even if it's usually served like a `GET`, because
//! it would not record the hit.
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::servers::http::v1::responses;

#[allow(clippy::unused_async)]
pub async fn handle(method: Method) -> Response {
    debug!(target: "HTTP TRACKER", %method, "method not allowed");

    responses::error::Error::MethodNotAllowed.into_response()
}
