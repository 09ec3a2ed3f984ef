//! This module contains functions to handle signals.
use std::time::Duration;

use derive_more::Display;
use tokio::time::sleep;
use tracing::info;

/// Time the server waits for open connections to finish before closing them.
pub const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(90);

/// This is the message that the "launcher" spawned task receives from the main
/// application process to notify the service to shutdown.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    Normal,
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// If a handler can not be installed that signal is ignored and the future
/// waits for the other one.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install the terminate signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when the `rx_halt` or the `global_shutdown_signal()` resolves.
///
/// A dropped halt sender is handled as a normal halt: nobody is left to stop
/// the server.
pub async fn shutdown_signal(rx_halt: tokio::sync::oneshot::Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => signal,
            Err(err) => {
                info!("Halt sender dropped ({err}), halting");
                Halted::Normal
            }
        }
    };

    tokio::select! {
        signal = halt => { info!("Halt signal processed: {}", signal) },
        () = global_shutdown_signal() => { info!("Global shutdown signal processed") }
    }
}

/// Same as `shutdown_signal()`, but shows a message when it resolves.
pub async fn shutdown_signal_with_message(rx_halt: tokio::sync::oneshot::Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");
}

/// It waits for the shutdown signal and then tells the server to stop
/// accepting connections. Open connections have
/// [`GRACEFUL_SHUTDOWN_TIMEOUT`] to finish.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: tokio::sync::oneshot::Receiver<Halted>, message: String) {
    shutdown_signal_with_message(rx_halt, message).await;

    info!("Sending graceful shutdown signal");
    handle.graceful_shutdown(Some(GRACEFUL_SHUTDOWN_TIMEOUT));

    while handle.connection_count() > 0 {
        sleep(Duration::from_secs(1)).await;

        info!("remaining alive connections: {}", handle.connection_count());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use crate::servers::signals::{shutdown_signal, Halted};

    #[tokio::test]
    async fn it_should_resolve_when_the_halt_message_is_sent() {
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        tx_halt.send(Halted::Normal).unwrap();

        assert!(timeout(Duration::from_secs(5), shutdown_signal(rx_halt)).await.is_ok());
    }

    #[tokio::test]
    async fn it_should_resolve_when_the_halt_sender_is_dropped() {
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        drop(tx_halt);

        assert!(timeout(Duration::from_secs(5), shutdown_signal(rx_halt)).await.is_ok());
    }

    #[tokio::test]
    async fn it_should_wait_while_no_halt_message_is_sent() {
        let (_tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        assert!(timeout(Duration::from_millis(100), shutdown_signal(rx_halt)).await.is_err());
    }
}
