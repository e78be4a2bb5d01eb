//! # プロフィール作成バックエンド
//!
//! 講師プロフィールを作成するバックエンドへの依頼送信を担当する。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `ProfileBackend` trait で送信方法を抽象化
//! - **送信先未設定時は実装を作らない**: 配信無効はユースケース側が送信先の有無で判断する
//! - **依存性注入**: 起動時に 1 度だけ作成し、`Arc<dyn ProfileBackend>` で共有する

mod http;

use async_trait::async_trait;
pub use http::{API_KEY_HEADER, HttpProfileBackend};
use lecprov_domain::provisioning::{DeliveryFailure, ProfileCreationRequest};

/// プロフィール作成依頼の送信トレイト
///
/// 1 回の呼び出しで高々 1 回だけ送信する。再送はしない。
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// プロフィール作成を依頼する
    async fn create_profile(
        &self,
        request: &ProfileCreationRequest,
    ) -> Result<(), DeliveryFailure>;
}
