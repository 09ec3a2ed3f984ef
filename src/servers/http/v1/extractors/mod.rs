//! Axum [`extractors`](axum::extract) for the HTTP server.
//!
//! There are two extractors:
//!
//! - [`ClientIpSources`](crate::servers::http::v1::extractors::client_ip_sources::Extract)
//! - [`TrackerName`](crate::servers::http::v1::extractors::tracker_name::ExtractTrackerName)
pub mod client_ip_sources;
pub mod tracker_name;
