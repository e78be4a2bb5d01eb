//! # HTTP ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /health` - Liveness Check
//! - `POST /internal/events/user-created` - アカウント作成イベントの受信

pub mod health;
pub mod user_created;

pub use health::health_check;
pub use user_created::{EventState, user_created};
