//! # Lecprov インフラ層
//!
//! 外部システムとの通信を担当する。
//!
//! ## モジュール構成
//!
//! - [`profile_backend`] - プロフィール作成バックエンドへの HTTP 呼び出し
//! - `mock` - テスト用のインメモリ実装（`test-utils` feature）

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod profile_backend;

pub use profile_backend::{HttpProfileBackend, ProfileBackend};
