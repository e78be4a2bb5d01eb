//! # アカウント作成イベントハンドラ
//!
//! 認証プロバイダ（またはそのフック）から届くアカウント作成イベントを受け取り、
//! [`UserCreatedNotifier`] に渡す。
//!
//! 受け付けたイベントには、配信の成否にかかわらず `202 Accepted` を返す。
//! アカウント作成側を失敗させないため、配信失敗を HTTP ステータスに反映しない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use lecprov_domain::user::UserCreatedEvent;

use crate::{error::NotifierError, usecase::UserCreatedNotifier};

/// イベント受信の共有状態
pub struct EventState {
    pub notifier: UserCreatedNotifier,
}

/// アカウント作成イベントを受信する
///
/// `POST /internal/events/user-created`
#[tracing::instrument(skip_all)]
pub async fn user_created(
    State(state): State<Arc<EventState>>,
    payload: Result<Json<UserCreatedEvent>, JsonRejection>,
) -> Result<StatusCode, NotifierError> {
    let Json(event) =
        payload.map_err(|rejection| NotifierError::InvalidEvent(rejection.body_text()))?;

    state.notifier.handle(&event).await;

    Ok(StatusCode::ACCEPTED)
}
