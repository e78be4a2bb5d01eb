//! # ヘルスチェックハンドラ

use axum::Json;
use lecprov_shared::HealthResponse;

/// Notifier のヘルスチェックエンドポイント
///
/// 依存先（バックエンド）には問い合わせない。バックエンド停止中でも
/// イベントの受け付け自体は続けられるため。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
