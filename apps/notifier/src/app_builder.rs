//! # Notifier アプリケーション構築
//!
//! DI（送信先・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use lecprov_infra::{HttpProfileBackend, ProfileBackend};
use lecprov_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::ProfileBackendConfig,
    handler::{EventState, health_check, user_created},
    usecase::UserCreatedNotifier,
};

/// 設定に応じた送信先を作成する
///
/// 送信先 URL が未設定なら `None`（配信無効）。
/// reqwest クライアントはここで 1 度だけ作り、プロセス終了まで使い回す。
pub fn build_profile_backend(
    config: &ProfileBackendConfig,
) -> Result<Option<Arc<dyn ProfileBackend>>, reqwest::Error> {
    let Some(create_url) = &config.create_url else {
        return Ok(None);
    };

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    Ok(Some(Arc::new(HttpProfileBackend::new(
        client,
        create_url.clone(),
        config.api_key.clone(),
    ))))
}

/// 設定からアカウント作成通知を組み立てる
pub fn build_notifier(config: &ProfileBackendConfig) -> Result<UserCreatedNotifier, reqwest::Error> {
    Ok(match build_profile_backend(config)? {
        Some(backend) => UserCreatedNotifier::new(backend),
        None => UserCreatedNotifier::disabled(),
    })
}

/// ルーターを構築する
///
/// レイヤーは外側から順に:
///
/// ```text
/// SetRequestId → Trace → PropagateRequestId → CanonicalLogLine → handler
/// ```
pub fn build_app(state: Arc<EventState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/internal/events/user-created", post(user_created))
        .with_state(state)
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
