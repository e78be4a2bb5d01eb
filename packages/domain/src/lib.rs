//! # Lecprov ドメイン層
//!
//! 認証プロバイダのアカウント作成イベントと、
//! バックエンドへのプロフィール作成依頼を表現するドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ドメイン層は HTTP クライアントや設定読み込みに一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - アカウント作成イベントとユーザー識別子
//! - [`provisioning`] - プロフィール作成依頼と配信失敗
//!
//! ## 使用例
//!
//! ```rust
//! use lecprov_domain::user::{Uid, UserCreatedEvent};
//!
//! let event = UserCreatedEvent {
//!     uid:            Uid::new("u1").unwrap(),
//!     email:          Some("a@b.com".to_string()),
//!     email_verified: true,
//!     display_name:   None,
//! };
//!
//! let request = event.to_profile_request().unwrap();
//! assert_eq!(request.name, "");
//! ```

pub mod error;
pub mod provisioning;
pub mod user;

pub use error::DomainError;
