//! Integration tests for the SurveyMonkey client
//!
//! Uses mockito to exercise status classification, retry behavior, and
//! payload decoding against a local mock server.

use secrecy::Secret;
use surveyor::adapters::surveymonkey::{ResponseFetcher, SurveyMonkeyClient};
use surveyor::config::secret::SecretValue;
use surveyor::config::{RetryConfig, SurveyMonkeyConfig};
use surveyor::domain::{ProviderError, SurveyorError};

fn client_for(server_url: &str) -> SurveyMonkeyClient {
    SurveyMonkeyClient::new(SurveyMonkeyConfig {
        base_url: server_url.to_string(),
        access_token: Secret::new(SecretValue::from("test-token".to_string())),
        timeout_seconds: 5,
        page_size: 100,
        retry: RetryConfig {
            max_retries: 3,
            initial_delay_ms: 1,
            max_delay_ms: 10,
            backoff_multiplier: 2.0,
        },
    })
    .unwrap()
}

const BULK_PAYLOAD: &str = r#"{
    "data": [
        {
            "id": "5007154402",
            "date_modified": "2023-05-01T12:34:56+00:00",
            "pages": [
                {
                    "id": "103332310",
                    "questions": [
                        {
                            "id": "116261824",
                            "answers": [
                                {"choice_id": "7", "simple_text": "Yes"}
                            ]
                        }
                    ]
                }
            ]
        }
    ],
    "links": {
        "next": "https://api.surveymonkey.com/v3/surveys/316084387/responses/bulk?page=2"
    },
    "per_page": 100,
    "total": 137
}"#;

#[tokio::test]
async fn test_fetch_page_decodes_bulk_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/surveys/316084387/responses/bulk")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BULK_PAYLOAD)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let url = format!("{}/v3/surveys/316084387/responses/bulk", server.url());
    let page = client.fetch_page(&url).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.responses.len(), 1);
    assert_eq!(page.responses[0].id, "5007154402");
    assert_eq!(
        page.next_url.as_deref(),
        Some("https://api.surveymonkey.com/v3/surveys/316084387/responses/bulk?page=2")
    );
}

#[tokio::test]
async fn test_last_page_has_no_next_link() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/bulk")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": [], "links": {}, "per_page": 100, "total": 0}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let page = client
        .fetch_page(&format!("{}/bulk", server.url()))
        .await
        .unwrap();

    assert!(page.responses.is_empty());
    assert!(page.next_url.is_none());
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/bulk")
        .with_status(429)
        .with_header("Retry-After", "86400")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .fetch_page(&format!("{}/bulk", server.url()))
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        SurveyorError::Provider(ProviderError::RateLimitExhausted { retry_after }) => {
            assert_eq!(retry_after.as_deref(), Some("86400"));
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failure() {
    // Nothing listens on this port; the client retries and then escalates
    let client = client_for("http://127.0.0.1:1");
    let err = client
        .fetch_page("http://127.0.0.1:1/bulk")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SurveyorError::Provider(ProviderError::ConnectionFailed(_))
    ));
}

#[tokio::test]
async fn test_persistent_server_error_exhausts_retries() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/bulk")
        .with_status(500)
        .with_body("internal error")
        .expect(3)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .fetch_page(&format!("{}/bulk", server.url()))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(
        err,
        SurveyorError::Provider(ProviderError::ServerError { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_authentication_failure_is_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/bulk")
        .with_status(401)
        .with_body(r#"{"error": {"message": "The authorization token was not provided"}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .fetch_page(&format!("{}/bulk", server.url()))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(
        err,
        SurveyorError::Provider(ProviderError::AuthenticationFailed(_))
    ));
}

#[tokio::test]
async fn test_malformed_payload_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/bulk")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .fetch_page(&format!("{}/bulk", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SurveyorError::Provider(ProviderError::InvalidResponse(_))
    ));
}
