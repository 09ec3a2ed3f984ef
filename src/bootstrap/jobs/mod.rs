//! Jobs started by the application.
//!
//! A job is a long running task spawned on the `tokio` runtime. The pixel
//! tracker has one: the [`http_tracker`] server.
//!
//! This module also builds what the jobs need before they start, like the
//! TLS configuration.
pub mod http_tracker;

use std::panic::Location;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use camino::Utf8PathBuf;
use pixel_tracker_configuration::TslConfig;
use thiserror::Error;

/// Sent by the server launcher once the listener is bound.
#[derive(Debug)]
pub struct Started {
    pub address: std::net::SocketAddr,
}

/// It loads the certificate and key files for a server with a TLS section.
///
/// Returns `None` for servers without TLS section, which serve plain HTTP.
pub async fn make_rust_tls(opt_tsl_config: &Option<TslConfig>) -> Option<Result<RustlsConfig, Error>> {
    let tsl_config = opt_tsl_config.as_ref()?;

    Some(load_rust_tls(tsl_config).await)
}

async fn load_rust_tls(tsl_config: &TslConfig) -> Result<RustlsConfig, Error> {
    let location = Location::caller();

    for path in [&tsl_config.ssl_cert_path, &tsl_config.ssl_key_path] {
        if !path.is_file() {
            return Err(Error::MissingTlsFile {
                path: path.clone(),
                location,
            });
        }
    }

    tracing::info!(target: "BOOTSTRAP", cert = %tsl_config.ssl_cert_path, key = %tsl_config.ssl_key_path, "using https");

    RustlsConfig::from_pem_file(&tsl_config.ssl_cert_path, &tsl_config.ssl_key_path)
        .await
        .map_err(|err| Error::BadTlsConfig {
            source: Arc::new(err),
            location,
        })
}

/// Errors starting the application jobs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("the TLS file {path} does not exist, {location}")]
    MissingTlsFile {
        path: Utf8PathBuf,
        location: &'static Location<'static>,
    },

    #[error("the TLS certificate or key can not be loaded: {source}, {location}")]
    BadTlsConfig {
        source: Arc<std::io::Error>,
        location: &'static Location<'static>,
    },

    #[error("unable to start the HTTP tracker: {source}")]
    UnableToStartHttpTracker {
        source: crate::servers::http::server::Error,
    },
}
