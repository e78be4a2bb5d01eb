//! # Notifier エラーハンドリング
//!
//! HTTP 面のエラー定義と、axum レスポンスへの変換。
//!
//! 配信失敗はここには現れない（ユースケース内でログに記録して握りつぶす）。
//! ここで扱うのは、イベントそのものを受け付けられない場合だけ。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lecprov_shared::{ErrorResponse, event_log::error};
use thiserror::Error;

/// Notifier の HTTP 層で発生するエラー
#[derive(Debug, Error)]
pub enum NotifierError {
    /// イベント本文を解釈できない（400 Bad Request）
    ///
    /// JSON として不正、必須の `uid` が無い・空、などの存在チェック違反。
    #[error("イベントを解釈できません: {0}")]
    InvalidEvent(String),
}

impl IntoResponse for NotifierError {
    fn into_response(self) -> Response {
        match self {
            NotifierError::InvalidEvent(detail) => {
                tracing::warn!(
                    error.category = error::category::CLIENT,
                    error.kind = error::kind::INVALID_EVENT,
                    detail = %detail,
                    "アカウント作成イベントを拒否"
                );
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(detail)),
                )
                    .into_response()
            }
        }
    }
}
