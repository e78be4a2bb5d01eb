//! # ユースケース層
//!
//! Notifier のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 送信先を `Arc<dyn ProfileBackend>` で外部から注入
//! - **薄いハンドラ**: HTTP ハンドラはデシリアライズのみ行い、判断はユースケースに集約

pub mod user_created;

pub use user_created::UserCreatedNotifier;
