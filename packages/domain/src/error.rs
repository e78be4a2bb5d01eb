//! # ドメイン層エラー定義
//!
//! ドメイン値の構築時に発生するエラー型。
//! HTTP 面では 400 Bad Request にマッピングされる。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がドメインの前提（必須・非空など）を満たさない場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
