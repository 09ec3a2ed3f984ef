//! Axum [`extractor`](axum::extract) to get the relevant information to
//! resolve the origin address of a hit.
//!
//! It reads two HTTP headers:
//!
//! - `X-Forwarded-For`: added by reverse proxies and CDNs.
//! - `Client-IP`: added by some hosting platforms.
//!
//! Header names are case-insensitive. The values are kept as they are, they
//! are not parsed as IP addresses. Values that are not visible ASCII are
//! ignored.
//!
//! Refer to the [`origin_address_resolver`](crate::servers::http::v1::services::origin_address_resolver)
//! service for the resolution order.
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::Response;

use crate::servers::http::v1::services::origin_address_resolver::ClientIpSources;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const CLIENT_IP: &str = "client-ip";

/// Extractor for the [`ClientIpSources`](crate::servers::http::v1::services::origin_address_resolver::ClientIpSources)
/// struct.
pub struct Extract(pub ClientIpSources);

#[async_trait]
impl<S> FromRequestParts<S> for Extract
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Extract(client_ip_sources_from(&parts.headers)))
    }
}

fn client_ip_sources_from(headers: &HeaderMap) -> ClientIpSources {
    ClientIpSources {
        x_forwarded_for: header_value(headers, X_FORWARDED_FOR),
        client_ip: header_value(headers, CLIENT_IP),
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}
