//! Module to handle the HTTP server instances.
//!
//! The [`HttpServer`] is a state machine for a given configuration. It can be
//! started and stopped many times but it always uses the same bind address
//! and TLS settings.
//!
//! The `HttpServer` is responsible for:
//!
//! - Spawning the task that runs the server.
//! - Waiting until the server is bound and reporting the real address.
//! - Sending the halt message to the task and waiting for it to finish.
//!
//! The [`Launcher`] knows how to start the server with graceful shutdown.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use derive_more::Constructor;
use futures::future::BoxFuture;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::{error, info};

use super::v1::routes::router;
use crate::bootstrap::jobs::Started;
use crate::core::Tracker;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Error that can occur when starting or stopping the HTTP server.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The spawned server task stopped before reporting its address. The
    /// address could not be bound or the server crashed on startup.
    #[error("The HTTP server could not be started on {bind_to}: no address was reported")]
    UnableToStart { bind_to: SocketAddr },

    /// The halt message could not be sent to the server task.
    #[error("Unable to send the halt message to the HTTP server on {binding}")]
    UnableToSendHaltingMessage { binding: SocketAddr },

    /// The server task could not be joined after halting.
    #[error("Unable to join the HTTP server task on {binding}: {message}")]
    UnableToJoinTask { binding: SocketAddr, message: String },
}

/// A stopped HTTP server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedHttpServer = HttpServer<Stopped>;

/// A running HTTP server.
#[allow(clippy::module_name_repetitions)]
pub type RunningHttpServer = HttpServer<Running>;

/// A HTTP server controller.
#[allow(clippy::module_name_repetitions)]
pub struct HttpServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped HTTP server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running HTTP server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl HttpServer<Stopped> {
    /// It creates a new `HttpServer` controller in `stopped` state.
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns a `HttpServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if no `SocketAddr` is returned after launching the server.
    pub async fn start(self, tracker: Arc<Tracker>) -> Result<HttpServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;
        let bind_to = launcher.bind_to;

        let task = tokio::spawn(async move {
            let server = launcher.start(tracker, tx_start, rx_halt);

            server.await;

            launcher
        });

        let binding = rx_start.await.map_err(|_| Error::UnableToStart { bind_to })?.address;

        Ok(HttpServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl HttpServer<Running> {
    /// It stops the server and returns a `HttpServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was closed.
    pub async fn stop(self) -> Result<HttpServer<Stopped>, Error> {
        let binding = self.state.binding;

        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltingMessage { binding })?;

        let launcher = self.state.task.await.map_err(|err| Error::UnableToJoinTask {
            binding,
            message: err.to_string(),
        })?;

        Ok(HttpServer {
            state: Stopped { launcher },
        })
    }
}

/// It starts the HTTP server on the given address.
#[derive(Constructor, Clone, Debug)]
pub struct Launcher {
    pub bind_to: SocketAddr,
    pub tls: Option<RustlsConfig>,
}

impl Launcher {
    /// It binds the listener and returns the future that serves the pixel
    /// tracker until the halt message (or a global shutdown signal) arrives.
    ///
    /// The real bound address is sent through `tx_start` once the listener is
    /// ready. If the address can not be bound the error is logged, nothing is
    /// sent and the returned future resolves immediately.
    pub fn start(&self, tracker: Arc<Tracker>, tx_start: Sender<Started>, rx_halt: Receiver<Halted>) -> BoxFuture<'static, ()> {
        let listener = match bind(self.bind_to) {
            Ok(listener) => listener,
            Err(err) => {
                error!(target: "HTTP TRACKER", bind_to = %self.bind_to, %err, "unable to bind the HTTP tracker");
                return Box::pin(async {});
            }
        };

        let address = match listener.local_addr() {
            Ok(address) => address,
            Err(err) => {
                error!(target: "HTTP TRACKER", bind_to = %self.bind_to, %err, "unable to get the local address");
                return Box::pin(async {});
            }
        };

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down HTTP server on socket address: {address}"),
        ));

        let tls = self.tls.clone();
        let protocol = if tls.is_some() { "https" } else { "http" };

        info!(target: "HTTP TRACKER", "Starting on: {protocol}://{address}");

        let app = router(tracker, address);

        let running = Box::pin(async move {
            let served = match tls {
                Some(tls) => {
                    axum_server::from_tcp_rustls(listener, tls)
                        .handle(handle)
                        .serve(app.into_make_service())
                        .await
                }
                None => {
                    axum_server::from_tcp(listener)
                        .handle(handle)
                        .serve(app.into_make_service())
                        .await
                }
            };

            if let Err(err) = served {
                error!(target: "HTTP TRACKER", %address, %err, "the HTTP tracker stopped with an error");
            }
        });

        info!(target: "HTTP TRACKER", "Started on: {protocol}://{address}");

        if tx_start.send(Started { address }).is_err() {
            error!(target: "HTTP TRACKER", %address, "nobody is waiting for the HTTP tracker to start");
        }

        running
    }
}

fn bind(bind_to: SocketAddr) -> std::io::Result<std::net::TcpListener> {
    let listener = std::net::TcpListener::bind(bind_to)?;
    listener.set_nonblocking(true)?;
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pixel_tracker_test_helpers::configuration::ephemeral;

    use crate::bootstrap::app::initialize_with_configuration;
    use crate::bootstrap::jobs::make_rust_tls;
    use crate::servers::http::server::{HttpServer, Launcher};

    #[tokio::test]
    async fn it_should_be_able_to_start_and_stop() {
        let cfg = Arc::new(ephemeral());
        let tracker = initialize_with_configuration(&cfg).await;
        let config = &cfg.http_tracker;

        let bind_to = config.bind_address;

        let tls = make_rust_tls(&config.tsl_config)
            .await
            .map(|tls| tls.expect("tls config failed"));

        let stopped = HttpServer::new(Launcher::new(bind_to, tls));
        let started = stopped.start(tracker).await.expect("it should start the server");
        let stopped = started.stop().await.expect("it should stop the server");

        assert_eq!(stopped.state.launcher.bind_to, bind_to);
    }

    #[tokio::test]
    async fn it_should_be_able_to_start_again_after_stopping() {
        let cfg = Arc::new(ephemeral());
        let tracker = initialize_with_configuration(&cfg).await;

        let stopped = HttpServer::new(Launcher::new(cfg.http_tracker.bind_address, None));
        let started = stopped.start(tracker.clone()).await.expect("it should start the server");
        let stopped = started.stop().await.expect("it should stop the server");
        let started = stopped.start(tracker).await.expect("it should start the server again");

        assert!(started.stop().await.is_ok());
    }

    #[tokio::test]
    async fn it_should_fail_to_start_when_the_address_is_already_in_use() {
        let cfg = Arc::new(ephemeral());
        let tracker = initialize_with_configuration(&cfg).await;

        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let bind_to = occupied.local_addr().unwrap();

        let stopped = HttpServer::new(Launcher::new(bind_to, None));

        assert!(stopped.start(tracker).await.is_err());
    }
}
