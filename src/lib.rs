//! **Pixel Tracker** is a tiny tracking pixel service written in
//! [Rust](https://www.rust-lang.org/).
//!
//! It serves a transparent 1x1 GIF and records every request (a "hit") under
//! a named tracker. Embed the pixel in a web page or an email and you get the
//! time and the origin address of every visit.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//!     - [Configuration](#configuration)
//!     - [Usage](#usage)
//! - [Components](#components)
//! - [Implementation](#implementation)
//!
//! # Features
//!
//! - [x] Record hits (timestamp and origin address) per tracker name.
//! - [x] Serve a cache-busting 1x1 transparent GIF.
//! - [x] Return all the hits of a tracker as JSON.
//! - [x] Persist the tracking data in a JSON file.
//! - [x] TLS support.
//! - [x] Health check endpoint.
//!
//! # Services
//!
//! From the end-user perspective the Pixel Tracker exposes one service:
//!
//! - An [`HTTP`](crate::servers::http) server with the `/tracker` endpoint.
//!   `GET` records a hit and returns the pixel, `POST` returns the hits.
//!
//! # Installation
//!
//! You can run the Pixel Tracker from the source code.
//!
//! ```text
//! git clone <repository>
//! cd pixel-tracker
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! The default configuration file is
//! `./share/default/config/pixel_tracker.development.toml`:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [storage]
//! path = "./storage/pixel_tracker/lib/tracking_data.json"
//!
//! [http_tracker]
//! bind_address = "0.0.0.0:7070"
//! ```
//!
//! The configuration can also be injected with environment variables:
//!
//! ```text
//! PIXEL_TRACKER_CONFIG_TOML=$(cat pixel_tracker.toml) cargo run
//! PIXEL_TRACKER_CONFIG_TOML_PATH=./pixel_tracker.toml cargo run
//! PIXEL_TRACKER_CONFIG_OVERRIDE_HTTP_TRACKER__BIND_ADDRESS=0.0.0.0:8080 cargo run
//! ```
//!
//! For more information about each service and options you can visit the
//! documentation for the [configuration crate](pixel_tracker_configuration).
//!
//! ## Usage
//!
//! Record a hit:
//!
//! ```text
//! curl -i "http://127.0.0.1:7070/tracker?trackerName=campaign1"
//! ```
//!
//! Get the hits:
//!
//! ```text
//! curl -X POST "http://127.0.0.1:7070/tracker?trackerName=campaign1"
//! ```
//!
//! # Components
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!     HTTP tracker |> Core tracker |> Storage (JSON file)
//! ```
//!
//! - [`core`](crate::core): the tracker records, hits and their persistence.
//! - [`servers`]: the HTTP server.
//! - [`bootstrap`]: configuration, logging and jobs.
//! - [`shared`]: the clock.
//!
//! # Implementation
//!
//! The whole tracking data is kept in memory and it's written to the storage
//! after every hit. A write lock serializes the hits, so concurrent requests
//! for the same tracker do not lose updates.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
pub mod shared;

#[macro_use]
extern crate lazy_static;

/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = shared::clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = shared::clock::Stopped;
