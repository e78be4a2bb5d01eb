//! # Notifier 設定
//!
//! 環境変数から Notifier サーバーの設定を読み込む。
//! 起動時に 1 度だけ読み込み、不正な値があればその場で起動を中止する。

use std::{env, fmt, time::Duration};

use reqwest::header::HeaderValue;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 13010;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("NOTIFIER_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),

    #[error("LEC_BACKEND_CREATE_URL が不正です（{reason}）: {value:?}")]
    InvalidBackendUrl { value: String, reason: String },

    /// 値そのものはログに残さない
    #[error("LEC_BACKEND_API_KEY は X-API-KEY ヘッダーに使用できない文字を含んでいます")]
    InvalidApiKey,

    #[error("LEC_BACKEND_TIMEOUT_SECS は 1 以上の整数である必要があります: {0:?}")]
    InvalidTimeout(String),
}

/// Notifier サーバーの設定
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// バインドアドレス
    pub host:    String,
    /// ポート番号
    pub port:    u16,
    /// プロフィール作成バックエンドの設定
    pub backend: ProfileBackendConfig,
}

/// プロフィール作成バックエンドの設定
///
/// `LEC_BACKEND_CREATE_URL` が未設定または空文字列の場合は配信無効（`create_url = None`）。
/// これはエラーではなく「機能オフ」として扱う。
#[derive(Clone, PartialEq, Eq)]
pub struct ProfileBackendConfig {
    /// プロフィール作成エンドポイント（`None` なら配信無効）
    pub create_url: Option<Url>,
    /// `X-API-KEY` ヘッダーの値（未設定なら空文字列）
    pub api_key:    String,
    /// リクエストタイムアウト（未設定ならクライアント既定値）
    pub timeout:    Option<Duration>,
}

impl fmt::Debug for ProfileBackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileBackendConfig")
            .field("enabled", &self.is_enabled())
            .field("create_url", &self.create_url.as_ref().map(Url::as_str))
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    ///
    /// テストでプロセス環境変数を書き換えずに済むよう、検索を注入可能にしている。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("NOTIFIER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("NOTIFIER_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            backend: ProfileBackendConfig::from_lookup(&lookup)?,
        })
    }
}

impl ProfileBackendConfig {
    /// 配信が有効か
    pub fn is_enabled(&self) -> bool {
        self.create_url.is_some()
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let create_url = lookup("LEC_BACKEND_CREATE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| parse_backend_url(&value))
            .transpose()?;

        let api_key = lookup("LEC_BACKEND_API_KEY").unwrap_or_default();
        if HeaderValue::from_str(&api_key).is_err() {
            return Err(ConfigError::InvalidApiKey);
        }

        let timeout = lookup("LEC_BACKEND_TIMEOUT_SECS")
            .map(|value| parse_timeout(&value))
            .transpose()?;

        Ok(Self {
            create_url,
            api_key,
            timeout,
        })
    }
}

fn parse_backend_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBackendUrl {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("未対応のスキーム: {other}"))),
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(value.to_string())),
    }
}
