use axum::Json;
use serde::{Deserialize, Serialize};

#[allow(clippy::unused_async)]
pub async fn handler() -> Json<Report> {
    Json(Report { status: Status::Ok })
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::{handler, Report, Status};

    #[tokio::test]
    async fn it_should_report_the_service_is_ok() {
        let report = handler().await.0;

        assert_eq!(report, Report { status: Status::Ok });
        assert_eq!(serde_json::to_string(&report).unwrap(), r#"{"status":"Ok"}"#);
    }
}
