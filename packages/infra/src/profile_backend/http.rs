//! HTTP 送信実装
//!
//! reqwest でバックエンドの作成エンドポイントへ JSON を POST する。
//!
//! ```text
//! POST {LEC_BACKEND_CREATE_URL}
//! Content-Type: application/json
//! X-API-KEY: {LEC_BACKEND_API_KEY または空文字列}
//!
//! {"uid": "...", "email": "...", "name": "..."}
//! ```
//!
//! レスポンスボディは成否判定にしか使わない。

use async_trait::async_trait;
use lecprov_domain::provisioning::{DeliveryFailure, ProfileCreationRequest};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use super::ProfileBackend;

/// API キーを載せるヘッダー名
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// ログに残すレスポンス本文の最大文字数
const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP 送信
///
/// `reqwest::Client` は外から注入する。タイムアウト等のクライアント設定は
/// 呼び出し側（起動処理）の責務。
pub struct HttpProfileBackend {
    client:     reqwest::Client,
    create_url: Url,
    api_key:    String,
}

impl HttpProfileBackend {
    /// 新しい HTTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `client`: 共有する reqwest クライアント
    /// - `create_url`: プロフィール作成エンドポイント
    /// - `api_key`: `X-API-KEY` ヘッダーの値（未設定なら空文字列）
    pub fn new(client: reqwest::Client, create_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client,
            create_url,
            api_key: api_key.into(),
        }
    }
}

/// reqwest のエラーを配信失敗に変換する
fn to_delivery_failure(err: reqwest::Error) -> DeliveryFailure {
    if err.is_timeout() {
        DeliveryFailure::Timeout
    } else {
        DeliveryFailure::Network(err.to_string())
    }
}

#[async_trait]
impl ProfileBackend for HttpProfileBackend {
    async fn create_profile(
        &self,
        request: &ProfileCreationRequest,
    ) -> Result<(), DeliveryFailure> {
        let response = self
            .client
            .post(self.create_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(to_delivery_failure)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: String = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();

        Err(DeliveryFailure::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}
