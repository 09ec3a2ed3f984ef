//! Pixel tracker application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. Right now there is only one job: the
//! HTTP tracker.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
