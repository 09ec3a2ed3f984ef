use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::TslConfig;

/// Configuration for the HTTP server serving the tracking pixel.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpTracker {
    /// The address the server will bind to.
    /// The format is `ip:port`, for example `0.0.0.0:7070`. If you want to
    /// listen to all interfaces, use `0.0.0.0`. If you want the operating
    /// system to choose a random port, use port `0`.
    #[serde(default = "HttpTracker::default_bind_address")]
    pub bind_address: SocketAddr,

    /// TSL config. When missing the server runs on plain HTTP.
    #[serde(default = "HttpTracker::default_tsl_config")]
    pub tsl_config: Option<TslConfig>,
}

impl Default for HttpTracker {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            tsl_config: Self::default_tsl_config(),
        }
    }
}

impl HttpTracker {
    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), 7070)
    }

    fn default_tsl_config() -> Option<TslConfig> {
        None
    }
}
