//! # アカウント作成イベント
//!
//! 認証プロバイダで新しいユーザーアカウントが作成されたときに届くイベントと、
//! そのアカウントを識別する `Uid` を定義する。
//!
//! ## ゲート条件
//!
//! プロフィール作成を依頼してよいのは、メールアドレスが存在し、かつ検証済みの
//! アカウントだけである。判定は [`UserCreatedEvent::verified_email`] に集約する。
//!
//! ## ワイヤ形式
//!
//! 認証プロバイダのイベントはキャメルケースで届く:
//!
//! ```json
//! { "uid": "u1", "email": "a@b.com", "emailVerified": true, "displayName": "Alice" }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{DomainError, provisioning::ProfileCreationRequest};

/// 認証プロバイダ上のアカウント識別子
///
/// プロバイダが発行する不透明な文字列。中身は解釈せず、空でないことだけを保証する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct Uid(String);

impl Uid {
    /// Uid を作成する
    ///
    /// # エラー
    ///
    /// 空文字列（空白のみを含む）の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("uid は必須です".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Uid {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Uid> for String {
    fn from(uid: Uid) -> Self {
        uid.0
    }
}

/// アカウント作成イベント
///
/// 認証プロバイダから 1 アカウントにつき 1 回届く。
/// `email` / `displayName` は欠落しうるため `Option`、`emailVerified` は
/// 欠落時に未検証として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedEvent {
    pub uid:            Uid,
    #[serde(default)]
    pub email:          Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub display_name:   Option<String>,
}

impl UserCreatedEvent {
    /// 検証済みメールアドレスを返す
    ///
    /// メールアドレスが無い（空文字列を含む）か、未検証の場合は `None`。
    pub fn verified_email(&self) -> Option<&str> {
        if !self.email_verified {
            return None;
        }
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    /// プロフィール作成依頼に射影する
    ///
    /// ゲート条件（検証済みメール）を満たさない場合は `None`。
    /// 表示名が無い場合、`name` は空文字列になる。
    pub fn to_profile_request(&self) -> Option<ProfileCreationRequest> {
        let email = self.verified_email()?;

        Some(ProfileCreationRequest {
            uid:   self.uid.clone(),
            email: email.to_string(),
            name:  self.display_name.clone().unwrap_or_default(),
        })
    }
}
