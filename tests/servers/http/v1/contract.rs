use std::sync::Arc;

use pixel_tracker_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::http::client::Client;
use crate::servers::http::Started;

fn init_logging() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });
}

#[tokio::test]
async fn environment_should_be_started_and_stopped() {
    init_logging();

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.stop().await;
}

mod for_all_config_modes {

    use pixel_tracker::servers::http::v1::responses::error::Body;
    use reqwest::Method;

    use super::*;

    #[tokio::test]
    async fn health_check_endpoint_should_return_ok() {
        init_logging();

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(*env.bind_address()).health_check().await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
        assert_eq!(response.text().await.unwrap(), r#"{"status":"Ok"}"#);

        env.stop().await;
    }

    mod receiving_a_hit {

        use super::*;
        use crate::servers::http::asserts::{
            assert_iso_8601_timestamp, assert_missing_tracker_name_error_response, assert_not_persisted_pixel_response,
            assert_pixel_response,
        };

        #[tokio::test]
        async fn should_respond_with_the_tracking_pixel() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let response = Client::new(*env.bind_address()).hit("campaign1").await;

            assert_pixel_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_record_the_hit_with_the_x_forwarded_for_address() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            Client::new(*env.bind_address())
                .hit_with_header("campaign1", "x-forwarded-for", "203.0.113.195")
                .await;

            let record = env.tracker.get_record("campaign1").await.unwrap();

            assert_eq!(record.hits.len(), 1);
            assert_eq!(record.hits[0].ip, "203.0.113.195");
            assert_iso_8601_timestamp(&record.hits[0].time);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_store_a_proxy_chain_verbatim() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            Client::new(*env.bind_address())
                .hit_with_header("campaign1", "x-forwarded-for", "203.0.113.195, 70.41.3.18")
                .await;

            let record = env.tracker.get_record("campaign1").await.unwrap();

            assert_eq!(record.hits[0].ip, "203.0.113.195, 70.41.3.18");

            env.stop().await;
        }

        #[tokio::test]
        async fn should_record_the_hit_with_the_client_ip_address_when_there_is_no_x_forwarded_for_header() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            Client::new(*env.bind_address())
                .hit_with_header("campaign1", "client-ip", "198.51.100.7")
                .await;

            let record = env.tracker.get_record("campaign1").await.unwrap();

            assert_eq!(record.hits[0].ip, "198.51.100.7");

            env.stop().await;
        }

        #[tokio::test]
        async fn should_record_an_unknown_address_when_there_is_no_origin_header() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            Client::new(*env.bind_address()).hit("campaign1").await;

            let record = env.tracker.get_record("campaign1").await.unwrap();

            assert_eq!(record.hits[0].ip, "unknown");

            env.stop().await;
        }

        #[tokio::test]
        async fn should_append_hits_in_the_order_they_were_received() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let client = Client::new(*env.bind_address());

            client.hit_with_header("campaign1", "x-forwarded-for", "203.0.113.1").await;
            client.hit_with_header("campaign1", "x-forwarded-for", "203.0.113.2").await;

            let record = env.tracker.get_record("campaign1").await.unwrap();

            assert_eq!(record.hits.len(), 2);
            assert_eq!(record.hits[0].ip, "203.0.113.1");
            assert_eq!(record.hits[1].ip, "203.0.113.2");
            assert!(record.hits[0].time <= record.hits[1].time);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_the_tracker_name_is_missing() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let response = Client::new(*env.bind_address()).request(Method::GET, "tracker", None).await;

            assert_missing_tracker_name_error_response(response).await;
            assert_eq!(env.tracker.number_of_trackers().await, 0);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_the_tracker_name_is_empty() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let response = Client::new(*env.bind_address()).hit("").await;

            assert_missing_tracker_name_error_response(response).await;
            assert_eq!(env.tracker.number_of_trackers().await, 0);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_still_respond_with_the_pixel_when_the_hit_cannot_be_persisted() {
            init_logging();

            let env = Started::new(&configuration::ephemeral_with_unwritable_storage().into()).await;

            let response = Client::new(*env.bind_address()).hit("campaign1").await;

            assert_not_persisted_pixel_response(response).await;
            assert_eq!(env.tracker.get_record("campaign1").await.unwrap().hits.len(), 1);

            env.stop().await;
        }
    }

    mod requesting_the_tracker_data {

        use super::*;
        use crate::servers::http::asserts::{
            assert_missing_tracker_name_error_response, assert_tracker_not_found_error_response,
            assert_tracker_record_response,
        };

        #[tokio::test]
        async fn should_return_the_hits_recorded_for_the_tracker() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let client = Client::new(*env.bind_address());

            client.hit_with_header("campaign1", "x-forwarded-for", "203.0.113.195").await;
            client.hit("campaign1").await;

            let record = assert_tracker_record_response(client.tracker_data("campaign1").await).await;

            assert_eq!(record.tracker_name, "campaign1");
            assert_eq!(record.hits.len(), 2);
            assert_eq!(record.hits[0].ip, "203.0.113.195");
            assert_eq!(record.hits[1].ip, "unknown");

            env.stop().await;
        }

        #[tokio::test]
        async fn should_not_record_a_hit() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let client = Client::new(*env.bind_address());

            env.add_hit("campaign1", "203.0.113.195").await;

            client.tracker_data("campaign1").await;
            client.tracker_data("campaign1").await;

            assert_eq!(env.tracker.get_record("campaign1").await.unwrap().hits.len(), 1);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_the_tracker_has_no_hits() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let response = Client::new(*env.bind_address()).tracker_data("campaign1").await;

            assert_tracker_not_found_error_response(response).await;
            assert_eq!(env.tracker.number_of_trackers().await, 0);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_the_tracker_name_is_missing() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let response = Client::new(*env.bind_address()).request(Method::POST, "tracker", None).await;

            assert_missing_tracker_name_error_response(response).await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_the_hits_persisted_before_a_restart() {
            init_logging();

            let configuration = Arc::new(configuration::ephemeral());

            let env = Started::new(&configuration).await;

            Client::new(*env.bind_address())
                .hit_with_header("campaign1", "client-ip", "198.51.100.7")
                .await;

            env.stop().await;

            let env = Started::new(&configuration).await;

            let record = assert_tracker_record_response(Client::new(*env.bind_address()).tracker_data("campaign1").await).await;

            assert_eq!(record.hits.len(), 1);
            assert_eq!(record.hits[0].ip, "198.51.100.7");

            env.stop().await;
        }
    }

    mod using_any_other_method {

        use super::*;
        use crate::servers::http::asserts::assert_method_not_allowed_error_response;

        #[tokio::test]
        async fn should_be_rejected_without_side_effects() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let client = Client::new(*env.bind_address());

            for method in [Method::PUT, Method::DELETE, Method::PATCH, Method::OPTIONS] {
                let response = client.request(method, "tracker?trackerName=campaign1", None).await;

                assert_method_not_allowed_error_response(response).await;
            }

            assert_eq!(env.tracker.number_of_trackers().await, 0);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_reject_head_requests() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let response = Client::new(*env.bind_address())
                .request(Method::HEAD, "tracker?trackerName=campaign1", None)
                .await;

            // A HEAD response has no body to decode.
            assert_eq!(response.status(), 405);
            assert_eq!(env.tracker.number_of_trackers().await, 0);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_the_error_message() {
            init_logging();

            let env = Started::new(&configuration::ephemeral().into()).await;

            let response = Client::new(*env.bind_address())
                .request(Method::DELETE, "tracker?trackerName=campaign1", None)
                .await;

            let body: Body = response.json().await.unwrap();

            assert_eq!(body.error, "Method not allowed");

            env.stop().await;
        }
    }
}
