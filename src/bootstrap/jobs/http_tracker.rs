//! HTTP tracker job starter.
//!
//! The function [`http_tracker::start_job`](crate::bootstrap::jobs::http_tracker::start_job)
//! starts a new HTTP tracker server.
//!
//! The [`http_tracker::start_job`](crate::bootstrap::jobs::http_tracker::start_job)
//! function spawns a new asynchronous task, that tasks is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back to the
//! main application.
//!
//! The "**launcher**" is an intermediary thread that decouples the HTTP server
//! from the process that handles it.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use pixel_tracker_configuration::HttpTracker;
use tokio::task::JoinHandle;
use tracing::error;

use super::{make_rust_tls, Error};
use crate::core;
use crate::servers::http::server::{HttpServer, Launcher, Running};

/// It starts a new HTTP server with the provided configuration.
///
/// The returned task finishes when the server is stopped by a global shutdown
/// signal (ctrl-c or `SIGTERM`).
///
/// # Errors
///
/// It would return an error if the TLS configuration is not valid or the
/// server can not be started, for example, because the address is in use.
pub async fn start_job(config: &HttpTracker, tracker: Arc<core::Tracker>) -> Result<JoinHandle<()>, Error> {
    let socket = config.bind_address;

    let tls = match make_rust_tls(&config.tsl_config).await {
        Some(tls) => Some(tls?),
        None => None,
    };

    start_v1(socket, tls, tracker).await
}

async fn start_v1(socket: SocketAddr, tls: Option<RustlsConfig>, tracker: Arc<core::Tracker>) -> Result<JoinHandle<()>, Error> {
    let server = HttpServer::new(Launcher::new(socket, tls))
        .start(tracker)
        .await
        .map_err(|source| Error::UnableToStartHttpTracker { source })?;

    let Running {
        binding,
        halt_task,
        task,
    } = server.state;

    Ok(tokio::spawn(async move {
        if let Err(err) = task.await {
            error!(target: "HTTP TRACKER", %binding, %err, "unable to join the http tracker task");
        }

        // The halt channel stays open while the server runs.
        drop(halt_task);
    }))
}
