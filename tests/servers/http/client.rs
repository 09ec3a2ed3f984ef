use reqwest::{Client as ReqwestClient, Method, Response};

/// HTTP Tracker Client
pub struct Client {
    server_addr: std::net::SocketAddr,
    reqwest_client: ReqwestClient,
}

/// URL components in this context:
///
/// ```text
/// http://127.0.0.1:62304/tracker?trackerName=campaign1
/// \_____________________/\_____/ \___________________/
///            |              |              |
///         base url        path           query
/// ```
impl Client {
    pub fn new(server_addr: std::net::SocketAddr) -> Self {
        Self {
            server_addr,
            reqwest_client: reqwest::Client::builder().build().unwrap(),
        }
    }

    /// It records a hit for the tracker.
    pub async fn hit(&self, tracker_name: &str) -> Response {
        self.request(Method::GET, &Self::build_tracker_path_and_query(tracker_name), None)
            .await
    }

    /// It records a hit for the tracker, adding one origin header.
    pub async fn hit_with_header(&self, tracker_name: &str, key: &str, value: &str) -> Response {
        self.request(
            Method::GET,
            &Self::build_tracker_path_and_query(tracker_name),
            Some((key, value)),
        )
        .await
    }

    /// It gets the tracker data.
    pub async fn tracker_data(&self, tracker_name: &str) -> Response {
        self.request(Method::POST, &Self::build_tracker_path_and_query(tracker_name), None)
            .await
    }

    pub async fn health_check(&self) -> Response {
        self.request(Method::GET, "health_check", None).await
    }

    pub async fn request(&self, method: Method, path: &str, header: Option<(&str, &str)>) -> Response {
        let mut request = self.reqwest_client.request(method, self.build_url(path));

        if let Some((key, value)) = header {
            request = request.header(key, value);
        }

        request.send().await.unwrap()
    }

    fn build_tracker_path_and_query(tracker_name: &str) -> String {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("trackerName", tracker_name)
            .finish();

        format!("tracker?{query}")
    }

    fn build_url(&self, path: &str) -> String {
        let base_url = self.base_url();
        format!("{base_url}{path}")
    }

    fn base_url(&self) -> String {
        format!("http://{}/", &self.server_addr)
    }
}
