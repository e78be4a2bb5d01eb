//! # アカウント作成イベント受信のテスト
//!
//! ルーター全体（Request ID / Trace / Canonical Log レイヤー込み）に対して
//! `oneshot` でリクエストを送り、以下を検証する。
//!
//! - 受け付けたイベントには配信結果にかかわらず 202 を返す
//! - ゲート条件を満たしたときだけバックエンドへ送信される
//! - 解釈できないイベントは 400 で拒否され、送信されない
//! - 実 HTTP 経由で、バックエンドが期待どおりのヘッダーとボディを受け取る

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, StatusCode};
use lecprov_domain::{
    provisioning::{DeliveryFailure, ProfileCreationRequest},
    user::Uid,
};
use lecprov_infra::mock::MockProfileBackend;
use lecprov_notifier::{
    app_builder::{build_app, build_notifier},
    config::NotifierConfig,
    handler::EventState,
    usecase::UserCreatedNotifier,
};
use pretty_assertions::assert_eq;
use tower::ServiceExt;
use wiremock::{
    Mock,
    MockServer,
    ResponseTemplate,
    matchers::{method, path},
};

const EVENT_PATH: &str = "/internal/events/user-created";

fn test_app(backend: MockProfileBackend) -> Router {
    let notifier = UserCreatedNotifier::new(Arc::new(backend));
    build_app(Arc::new(EventState { notifier }))
}

fn disabled_app() -> Router {
    build_app(Arc::new(EventState {
        notifier: UserCreatedNotifier::disabled(),
    }))
}

fn event_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(EVENT_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn alice_event(email_verified: bool) -> String {
    serde_json::json!({
        "uid": "u1",
        "email": "a@b.com",
        "emailVerified": email_verified,
        "displayName": "Alice",
    })
    .to_string()
}

#[tokio::test]
async fn test_検証済みイベントは202を返し依頼を1回送信する() {
    let backend = MockProfileBackend::new();
    let app = test_app(backend.clone());

    let response = app.oneshot(event_request(&alice_event(true))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(
        backend.requests(),
        vec![ProfileCreationRequest {
            uid:   Uid::new("u1").unwrap(),
            email: "a@b.com".to_string(),
            name:  "Alice".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_未検証イベントも202を返すが送信しない() {
    let backend = MockProfileBackend::new();
    let app = test_app(backend.clone());

    let response = app.oneshot(event_request(&alice_event(false))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_配信無効なら検証済みでも送信しない() {
    let app = disabled_app();

    let response = app.oneshot(event_request(&alice_event(true))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_送信失敗でも202を返す() {
    let backend = MockProfileBackend::failing(DeliveryFailure::Network(
        "connection refused".to_string(),
    ));
    let app = test_app(backend.clone());

    let response = app.oneshot(event_request(&alice_event(true))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_空のuidは400で拒否され送信しない() {
    let backend = MockProfileBackend::new();
    let app = test_app(backend.clone());
    let body = r#"{"uid":"","email":"a@b.com","emailVerified":true}"#;

    let response = app.oneshot(event_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], 400);
    assert_eq!(
        json["type"],
        "https://lecprov.example.com/errors/bad-request"
    );
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_jsonでない本文は400で拒否される() {
    let backend = MockProfileBackend::new();
    let app = test_app(backend.clone());

    let response = app.oneshot(event_request("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_レスポンスにx_request_idが付与される() {
    let app = test_app(MockProfileBackend::new());

    let response = app.oneshot(event_request(&alice_event(true))).await.unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id ヘッダーが付与されること")
        .to_str()
        .unwrap();
    let uuid = uuid::Uuid::parse_str(request_id).unwrap();
    assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
}

#[tokio::test]
async fn test_ヘルスチェックはhealthyを返す() {
    let app = disabled_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
}

// ===== 設定 → 実 HTTP 送信までの通し =====

fn config_for(create_url: Option<String>, api_key: Option<&str>) -> NotifierConfig {
    NotifierConfig::from_lookup(|key| match key {
        "LEC_BACKEND_CREATE_URL" => create_url.clone(),
        "LEC_BACKEND_API_KEY" => api_key.map(str::to_string),
        _ => None,
    })
    .unwrap()
}

#[tokio::test]
async fn test_設定したurlへapiキー付きでpostされる() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let config = config_for(Some(format!("{}/create", server.uri())), Some("k1"));
    let notifier = build_notifier(&config.backend).unwrap();
    let app = build_app(Arc::new(EventState { notifier }));

    let response = app.oneshot(event_request(&alice_event(true))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let headers = &received[0].headers;
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
    assert_eq!(headers.get("x-api-key").unwrap(), "k1");
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"uid": "u1", "email": "a@b.com", "name": "Alice"})
    );
}

#[tokio::test]
async fn test_apiキー未設定なら空のx_api_keyで送信される() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let config = config_for(Some(format!("{}/create", server.uri())), None);
    let notifier = build_notifier(&config.backend).unwrap();
    let app = build_app(Arc::new(EventState { notifier }));

    app.oneshot(event_request(&alice_event(true))).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].headers.get("x-api-key").unwrap(), "");
}

#[tokio::test]
async fn test_url未設定ならどこにも送信しない() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config = config_for(None, Some("k1"));
    let notifier = build_notifier(&config.backend).unwrap();
    let app = build_app(Arc::new(EventState { notifier }));

    let response = app.oneshot(event_request(&alice_event(true))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_バックエンドが500を返しても202を返す() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    let config = config_for(Some(format!("{}/create", server.uri())), Some("k1"));
    let notifier = build_notifier(&config.backend).unwrap();
    let app = build_app(Arc::new(EventState { notifier }));

    let response = app.oneshot(event_request(&alice_event(true))).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}
