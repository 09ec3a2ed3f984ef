//! Axum [`handlers`](axum#handlers) for the HTTP server.
//!
//! Refer to the generic [HTTP server documentation](crate::servers::http) for
//! more information about the HTTP tracker.
pub mod health_check;
pub mod method_not_allowed;
pub mod pixel;
pub mod tracker_data;
