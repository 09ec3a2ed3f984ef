use std::sync::Arc;

use pixel_tracker::bootstrap::app::initialize_with_configuration;
use pixel_tracker::bootstrap::jobs::make_rust_tls;
use pixel_tracker::core::Tracker;
use pixel_tracker::servers::http::server::{HttpServer, Launcher, Running, Stopped};
use pixel_tracker_configuration::{Configuration, HttpTracker};

pub struct Environment<S> {
    pub config: Arc<HttpTracker>,
    pub tracker: Arc<Tracker>,
    pub server: HttpServer<S>,
}

impl<S> Environment<S> {
    /// Record a hit directly in the tracker, without a request.
    pub async fn add_hit(&self, tracker_name: &str, ip: &str) {
        self.tracker.record_hit(tracker_name, ip).await;
    }
}

impl Environment<Stopped> {
    #[allow(dead_code)]
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        let tracker = initialize_with_configuration(configuration).await;

        let config = Arc::new(configuration.http_tracker.clone());

        let bind_to = config.bind_address;

        let tls = make_rust_tls(&config.tsl_config)
            .await
            .map(|tls| tls.expect("tls config failed"));

        let server = HttpServer::new(Launcher::new(bind_to, tls));

        Self { config, tracker, server }
    }

    #[allow(dead_code)]
    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            tracker: self.tracker.clone(),
            server: self.server.start(self.tracker).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).await.start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            tracker: self.tracker,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn bind_address(&self) -> &std::net::SocketAddr {
        &self.server.state.binding
    }
}
