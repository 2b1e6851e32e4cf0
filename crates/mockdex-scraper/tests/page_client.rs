//! Integration tests for `PageClient::fetch_page` and the fetch→extract
//! path.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mockdex_scraper::{extract_record, PageClient, ScrapeError};

/// Builds a `PageClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client() -> PageClient {
    PageClient::new(5, "mockdex-test/0.1").expect("failed to build test PageClient")
}

const INTERVIEW_PAGE: &str = r#"
    <html>
      <head><title>Two Sum Mock | interviewing.io</title></head>
      <body>
        <h1>Java Interview with a Google engineer</h1>
        <div>
          <h3>Interview Summary</h3>
          <p>Problem type</p><p>Two Sum</p>
        </div>
        <div>
          <h3>Interview Feedback</h3>
          <div class="flex w-full py-4"><div>Communication ability</div><div>4/4</div></div>
        </div>
      </body>
    </html>
"#;

#[tokio::test]
async fn fetch_page_returns_body_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mocks/google-java-two-sum"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INTERVIEW_PAGE))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/mocks/google-java-two-sum", server.uri());
    let result = client.fetch_page(&url).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(result.unwrap().contains("Interview Summary"));
}

#[tokio::test]
async fn fetch_page_propagates_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/mocks/gone-page", server.uri());
    let result = client.fetch_page(&url).await;

    assert!(
        matches!(result, Err(ScrapeError::NotFound { .. })),
        "expected ScrapeError::NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_page_propagates_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/mocks/flaky-page", server.uri());
    let result = client.fetch_page(&url).await;

    match result {
        Err(ScrapeError::UnexpectedStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected ScrapeError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetched_page_extracts_into_a_complete_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mocks/google-java-two-sum"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INTERVIEW_PAGE))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/mocks/google-java-two-sum", server.uri());
    let html = client.fetch_page(&url).await.expect("fetch should succeed");
    let record = extract_record(&html, &url);

    assert_eq!(record.interview_id, "google-java-two-sum");
    assert_eq!(record.source_url, url);
    assert_eq!(
        record.interview_title,
        "Java Interview with a Google engineer"
    );
    assert_eq!(record.problem_name, "Two Sum");
    assert_eq!(record.language, "Java");
    assert_eq!(record.company, "Google");
    assert_eq!(record.score_communication, "4/4");
    // No transcript section on this page: the column is present but empty.
    assert_eq!(record.transcript, "");
}
