use chrono::{DateTime, SecondsFormat};
use pixel_tracker::core::store::TrackerRecord;
use pixel_tracker::servers::http::v1::responses::error::Body;
use pixel_tracker::servers::http::v1::responses::pixel::TRACKING_PIXEL_GIF;
use reqwest::Response;

pub async fn assert_pixel_response(response: Response) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "image/gif");
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert!(response.headers().get("warning").is_none());

    let body = response.bytes().await.unwrap();

    assert_eq!(body.as_ref(), TRACKING_PIXEL_GIF.as_slice());
}

pub async fn assert_not_persisted_pixel_response(response: Response) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "image/gif");
    assert_eq!(
        response.headers().get("warning").unwrap(),
        "199 - \"tracking data could not be persisted\""
    );
}

pub async fn assert_tracker_record_response(response: Response) -> TrackerRecord {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let text = response.text().await.unwrap();

    assert!(text.contains("\n  \"trackerName\""), "the JSON should be pretty printed, got: {text}");

    serde_json::from_str(&text).unwrap_or_else(|_| panic!("response body should be a tracker record, got \"{text}\""))
}

/// The time of a hit must be an ISO 8601 UTC timestamp with milliseconds,
/// like `2024-05-01T10:20:30.456Z`.
pub fn assert_iso_8601_timestamp(time: &str) {
    let parsed = DateTime::parse_from_rfc3339(time).unwrap_or_else(|_| panic!("\"{time}\" should be an ISO 8601 timestamp"));

    assert_eq!(parsed.to_utc().to_rfc3339_opts(SecondsFormat::Millis, true), time);
}

pub async fn assert_json_error_response(response: Response, status: u16, expected_error: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let body: Body = response.json().await.unwrap();

    assert_eq!(body.error, expected_error);
}

pub async fn assert_missing_tracker_name_error_response(response: Response) {
    assert_json_error_response(response, 400, "trackerName query parameter is required").await;
}

pub async fn assert_tracker_not_found_error_response(response: Response) {
    assert_json_error_response(response, 404, "No data found for the specified trackerName").await;
}

pub async fn assert_method_not_allowed_error_response(response: Response) {
    assert_json_error_response(response, 405, "Method not allowed").await;
}
