use std::time::Duration;

use orglens_http::{FetchError, PageFetcher};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_page(body: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn returns_body_on_success() {
    let server = mock_page("<html><body>hello</body></html>", 200).await;
    let url = Url::parse(&server.uri()).unwrap();

    let fetcher = PageFetcher::new().unwrap();
    let body = fetcher.fetch_html(&url).await.unwrap();
    assert!(body.contains("hello"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = mock_page("not here", 404).await;
    let url = Url::parse(&server.uri()).unwrap();

    let fetcher = PageFetcher::new().unwrap();
    let err = fetcher.fetch_html(&url).await.unwrap_err();
    match err {
        FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn issues_exactly_one_request_and_never_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    let url = Url::parse(&server.uri()).unwrap();

    let fetcher = PageFetcher::new().unwrap();
    let err = fetcher.fetch_html(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { .. }));
    // MockServer verifies the expect(1) call count on drop.
}

#[tokio::test]
async fn timeout_surfaces_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let url = Url::parse(&server.uri()).unwrap();

    let fetcher = PageFetcher::new()
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let err = fetcher.fetch_html(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }));
}
