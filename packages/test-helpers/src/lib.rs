//! Testing helpers for the Pixel Tracker.
pub mod configuration;
pub mod random;
