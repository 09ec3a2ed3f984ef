//! This service resolves the origin address of a hit from the request.
//!
//! The origin address is stored with every hit. It's not validated nor parsed:
//! the header value is stored as it was received. Given this request chain:
//!
//! ```text
//! client          <-> http proxy 1                 <-> http proxy 2                          <-> server
//! ip: 126.0.0.1       ip: 126.0.0.2                    ip: 126.0.0.3                             ip: 126.0.0.4
//!                     X-Forwarded-For: 126.0.0.1       X-Forwarded-For: 126.0.0.1,126.0.0.2
//! ```
//!
//! The origin address would be `126.0.0.1,126.0.0.2`.
//!
//! The sources are checked in this order:
//!
//! 1. The `X-Forwarded-For` header.
//! 2. The `Client-IP` header.
//! 3. Otherwise the literal [`UNKNOWN_ORIGIN_ADDRESS`].
//!
//! > **NOTICE**: the address of the TCP connection is never used.
use serde::{Deserialize, Serialize};

/// The origin address recorded when the request has no origin headers.
pub const UNKNOWN_ORIGIN_ADDRESS: &str = "unknown";

/// This struct contains the sources from which the origin address can be
/// obtained.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct ClientIpSources {
    /// The value of the `X-Forwarded-For` HTTP header.
    pub x_forwarded_for: Option<String>,
    /// The value of the `Client-IP` HTTP header.
    pub client_ip: Option<String>,
}

/// Resolves the origin address from the request sources.
///
/// ```rust
/// use pixel_tracker::servers::http::v1::services::origin_address_resolver::{invoke, ClientIpSources};
///
/// let origin = invoke(&ClientIpSources {
///     x_forwarded_for: Some("203.0.113.195".to_string()),
///     client_ip: Some("198.51.100.7".to_string()),
/// });
///
/// assert_eq!(origin, "203.0.113.195");
/// ```
///
/// Without origin headers:
///
/// ```rust
/// use pixel_tracker::servers::http::v1::services::origin_address_resolver::{invoke, ClientIpSources};
///
/// let origin = invoke(&ClientIpSources::default());
///
/// assert_eq!(origin, "unknown");
/// ```
#[must_use]
pub fn invoke(client_ip_sources: &ClientIpSources) -> String {
    client_ip_sources
        .x_forwarded_for
        .as_deref()
        .filter(|value| !value.is_empty())
        .or_else(|| client_ip_sources.client_ip.as_deref().filter(|value| !value.is_empty()))
        .unwrap_or(UNKNOWN_ORIGIN_ADDRESS)
        .to_string()
}
