//! HTTP Tracker.
//!
//! This module contains the HTTP tracker implementation.
//!
//! The HTTP tracker is a simple HTTP server with one endpoint, `/tracker`,
//! that responds to two methods:
//!
//! - `GET`: records a hit and returns the tracking pixel.
//! - `POST`: returns the hits recorded for a tracker.
//!
//! ## Table of Contents
//!
//! - [Requests](#requests)
//!     - [Hit](#hit)
//!     - [Tracker data](#tracker-data)
//!     - [Other methods](#other-methods)
//!     - [Health check](#health-check)
//! - [Versioning](#versioning)
//!
//! ## Requests
//!
//! ### Hit
//!
//! Embed the pixel in a page or an email to count how many times it's
//! displayed:
//!
//! ```html
//! <img src="http://0.0.0.0:7070/tracker?trackerName=campaign1" width="1" height="1" alt="">
//! ```
//!
//! **Query parameters**
//!
//! Parameter     | Type   | Description  | Required
//! --------------|--------|--------------|---------
//! `trackerName` | string | Tracker name | Yes
//!
//! **Headers**
//!
//! The origin address stored with the hit is taken from the `X-Forwarded-For`
//! header, then from the `Client-IP` header. Without any of them the hit is
//! recorded as `unknown`.
//!
//! **Sample request**
//!
//! ```bash
//! curl -i -H "X-Forwarded-For: 203.0.113.195" "http://0.0.0.0:7070/tracker?trackerName=campaign1"
//! ```
//!
//! **Sample response**
//!
//! ```text
//! HTTP/1.1 200 OK
//! content-type: image/gif
//! cache-control: no-cache, no-store, must-revalidate
//! content-length: 43
//! ```
//!
//! The body is a transparent 1x1 GIF. If the hit could not be saved to the
//! storage the response also contains a
//! `warning: 199 - "tracking data could not be persisted"` header. The hit is
//! kept in memory anyway.
//!
//! ### Tracker data
//!
//! **Sample request**
//!
//! ```bash
//! curl -X POST "http://0.0.0.0:7070/tracker?trackerName=campaign1"
//! ```
//!
//! **Sample response**
//!
//! ```json
//! {
//!   "trackerName": "campaign1",
//!   "hits": [
//!     {
//!       "time": "2024-05-01T10:20:30.456Z",
//!       "ip": "203.0.113.195"
//!     }
//!   ]
//! }
//! ```
//!
//! **Errors**
//!
//! Status | Body
//! -------|-----
//! `400`  | `{"error":"trackerName query parameter is required"}`
//! `404`  | `{"error":"No data found for the specified trackerName"}`
//!
//! The `400` error is also returned by the `GET` request.
//!
//! ### Other methods
//!
//! Any other method gets a `405` response with
//! `{"error":"Method not allowed"}`.
//!
//! ### Health check
//!
//! ```bash
//! curl "http://0.0.0.0:7070/health_check"
//! ```
//!
//! ```json
//! {"status":"Ok"}
//! ```
//!
//! ## Versioning
//!
//! The HTTP tracker is versioned. The current version is `v1`. The version
//! is not included in the URL.
pub mod server;
pub mod v1;
