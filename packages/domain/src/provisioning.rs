//! # プロフィール作成依頼
//!
//! バックエンドに講師プロフィールの作成を依頼するためのドメインモデル。
//!
//! ## 設計方針
//!
//! - **使い捨て**: `ProfileCreationRequest` は 1 回の呼び出しごとに作られ、送信後に捨てられる
//! - **best-effort**: 配信は高々 1 回。失敗は [`DeliveryFailure`] として記録されるだけで、
//!   アカウント作成そのものには影響しない
//! - **単一の失敗種別**: ネットワーク・タイムアウト・非 2xx はすべて `DeliveryFailure`

use serde::Serialize;
use thiserror::Error;

use crate::user::Uid;

/// プロフィール作成依頼
///
/// バックエンドへ送る JSON ボディ `{"uid", "email", "name"}` そのもの。
/// `email` は検証済みのものしか入らない（[`crate::user::UserCreatedEvent::to_profile_request`]）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCreationRequest {
    pub uid:   Uid,
    pub email: String,
    pub name:  String,
}

/// 配信失敗
///
/// バックエンド呼び出しで起こりうる唯一の失敗種別。
/// バリアントは原因の内訳であり、扱い（ログに記録して握りつぶす）はすべて同じ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryFailure {
    /// 接続失敗などのトランスポートエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// タイムアウト
    #[error("バックエンドの応答がタイムアウトしました")]
    Timeout,

    /// 2xx 以外のステータス
    #[error("予期しないステータス {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}
