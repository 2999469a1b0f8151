//! Integration tests for the HTTP fetcher.
//!
//! These tests verify request and error behavior against mock HTTP servers.

use docs_scraper_core::download::{FetchError, HttpClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a mock server with a text endpoint.
async fn setup_mock_text(path_str: &str, body: &[u8]) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_fetch_returns_body_text() {
    let body = "# Index\n\n- [Intro](https://example.com/intro.md)\n";
    let mock_server = setup_mock_text("/llms.txt", body.as_bytes()).await;

    let client = HttpClient::new().expect("client builds");
    let url = format!("{}/llms.txt", mock_server.uri());
    let text = client.fetch_text(&url).await.expect("fetch succeeds");

    assert_eq!(text, body);
}

#[tokio::test]
async fn test_fetch_sends_scraper_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doc.md"))
        .and(header(
            "user-agent",
            "AnthropicDocsScraper/1.0 (https://github.com/anthropics)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().expect("client builds");
    let url = format!("{}/doc.md", mock_server.uri());
    let text = client.fetch_text(&url).await.expect("UA matcher should match");

    assert_eq!(text, "ok");
}

#[tokio::test]
async fn test_fetch_makes_exactly_one_request_on_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky.md"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().expect("client builds");
    let url = format!("{}/flaky.md", mock_server.uri());
    let result = client.fetch_text(&url).await;

    assert!(result.is_err(), "503 must not be retried into success");
}

#[tokio::test]
async fn test_fetch_handles_404_as_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().expect("client builds");
    let url = format!("{}/missing.md", mock_server.uri());

    match client.fetch_text(&url).await {
        Err(FetchError::HttpStatus {
            status,
            url: err_url,
        }) => {
            assert_eq!(status, 404);
            assert!(err_url.contains("/missing.md"));
        }
        other => panic!("Expected HttpStatus(404), got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_rejects_invalid_utf8() {
    let mock_server = setup_mock_text("/binary.md", &[0x23, 0x20, 0xff, 0xfe, 0x0a]).await;

    let client = HttpClient::new().expect("client builds");
    let url = format!("{}/binary.md", mock_server.uri());

    match client.fetch_text(&url).await {
        Err(FetchError::Decode { url: err_url, .. }) => {
            assert!(err_url.ends_with("/binary.md"));
        }
        other => panic!("Expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_empty_body_is_success() {
    let mock_server = setup_mock_text("/empty.md", b"").await;

    let client = HttpClient::new().expect("client builds");
    let url = format!("{}/empty.md", mock_server.uri());
    let text = client.fetch_text(&url).await.expect("empty body is valid");

    assert!(text.is_empty());
}

#[tokio::test]
async fn test_fetch_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow.md"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = HttpClient::new_with_timeouts(1, 1).expect("client builds");
    let url = format!("{}/slow.md", mock_server.uri());

    match client.fetch_text(&url).await {
        Err(FetchError::Timeout { url: err_url }) => assert!(err_url.ends_with("/slow.md")),
        other => panic!("Expected Timeout, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    // Port 1 (tcpmux) is not served on loopback.
    let client = HttpClient::new().expect("client builds");
    let result = client.fetch_text("http://127.0.0.1:1/doc.md").await;

    assert!(
        matches!(result, Err(FetchError::Network { .. })),
        "Expected Network error, got: {result:?}"
    );
}
