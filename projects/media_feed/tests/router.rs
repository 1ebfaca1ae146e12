use axum::{
    body::{Body, Bytes},
    http::{header, Request, StatusCode},
    Router,
};
use projects_media_feed::{router, AppConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_router(base_url: String, favicon: Option<Bytes>) -> Router {
    let config = AppConfig {
        access_token: "test-token".to_owned(),
        base_url,
        ..AppConfig::default()
    };
    router(AppState::new(config, favicon))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Bytes) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

#[tokio::test]
async fn root_greets() {
    let (status, body) = get(test_router("http://127.0.0.1:1".into(), None), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"instagram basic API");
}

#[tokio::test]
async fn ping_pongs() {
    let (status, body) = get(test_router("http://127.0.0.1:1".into(), None), "/ping").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"pong");
}

#[tokio::test]
async fn json_defaults_to_twenty_and_returns_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/media"))
        .and(query_param("access_token", "test-token"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "1", "username": "alice", "caption": "#a#b c#d", "media_type": "IMAGE" },
                { "id": "2", "username": "alice", "media_type": "VIDEO", "thumbnail_url": "https://cdn/2.jpg" }
            ],
            "paging": { "cursors": { "before": "x", "after": "y" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(test_router(server.uri(), None), "/json").await;

    assert_eq!(status, StatusCode::OK);
    let entries: Value = serde_json::from_slice(&body).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["caption"], "#a#b c#d");
    assert_eq!(entries[1]["thumbnail_url"], "https://cdn/2.jpg");
    assert_eq!(entries[1]["caption"], "");
}

#[tokio::test]
async fn json_with_zero_limit_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get(test_router(server.uri(), None), "/json?limit=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn json_repeated_limit_uses_first_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get(test_router(server.uri(), None), "/json?limit=0&limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn json_repeated_limit_forwards_first_value_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/media"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "9" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(test_router(server.uri(), None), "/json?limit=2&limit=50").await;

    assert_eq!(status, StatusCode::OK);
    let entries: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries[0]["id"], "9");
}

#[tokio::test]
async fn json_failure_is_reported_in_body_with_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (status, body) = get(test_router(server.uri(), None), "/json?limit=5").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["error"], true);
    let message = value["message"].as_str().unwrap();
    assert!(message.starts_with("unable to unmarshal json response"));
    assert!(message.contains("not json"));
}

#[tokio::test]
async fn json_transport_failure_returns_no_entries() {
    let (status, body) = get(test_router("http://127.0.0.1:1".into(), None), "/json?limit=3").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["error"], true);
    assert!(value["message"].as_str().unwrap().starts_with("cannot fetch profile"));
}

#[tokio::test]
async fn favicon_served_when_loaded() {
    let favicon = Bytes::from_static(b"\x89PNG\r\n");
    let router = test_router("http://127.0.0.1:1".into(), Some(favicon.clone()));

    let request = Request::builder().uri("/favicon.ico").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, favicon);
}

#[tokio::test]
async fn favicon_missing_is_not_found() {
    let (status, _) = get(test_router("http://127.0.0.1:1".into(), None), "/favicon.ico").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
