use std::time::Duration;

use import_core::{ScrapeRequest, ScrapeResult, INVALID_RESPONSE_MESSAGE};
use import_engine::{ReqwestScrapeClient, ScrapeClient, ScrapeError, ScrapeSettings};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestScrapeClient {
    ReqwestScrapeClient::new(ScrapeSettings::with_backend(server.uri())).expect("client")
}

fn request(url: &str) -> ScrapeRequest {
    ScrapeRequest::from_input(url).expect("non-empty url")
}

#[tokio::test]
async fn posts_trimmed_url_and_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scrape-url"))
        .and(body_json(serde_json::json!({ "url": "https://example.com" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "content": "<html>...</html>" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let content = client_for(&server)
        .scrape(&request("  https://example.com  "))
        .await
        .expect("scrape ok");
    assert_eq!(content, "<html>...</html>");
}

#[tokio::test]
async fn missing_or_non_string_content_is_invalid() {
    for body in [
        serde_json::json!({}),
        serde_json::json!({ "content": 7 }),
        serde_json::json!({ "content": null }),
        serde_json::json!({ "content": "" }),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/scrape-url"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .scrape(&request("example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, ScrapeError::InvalidResponse);
        assert_eq!(
            ScrapeResult::from(err),
            ScrapeResult::failure(INVALID_RESPONSE_MESSAGE)
        );
    }
}

#[tokio::test]
async fn http_error_uses_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scrape-url"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "bad url" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .scrape(&request("ftp://x"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ScrapeError::Http {
            status: 400,
            message: "bad url".to_string()
        }
    );
    assert_eq!(err.to_string(), "bad url");
}

#[tokio::test]
async fn http_error_with_unparseable_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scrape-url"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<h1>upstream down</h1>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .scrape(&request("example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Bad Gateway");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client =
        ReqwestScrapeClient::new(ScrapeSettings::with_backend(format!("http://127.0.0.1:{port}")))
            .unwrap();
    let err = client.scrape(&request("example.com")).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn optional_timeout_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scrape-url"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(serde_json::json!({ "content": "late" })),
        )
        .mount(&server)
        .await;

    let settings = ScrapeSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..ScrapeSettings::with_backend(server.uri())
    };
    let client = ReqwestScrapeClient::new(settings).unwrap();
    let err = client.scrape(&request("example.com")).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Transport(_)), "got {err:?}");
}
