//! # Notifier サーバー
//!
//! 認証プロバイダでアカウントが作成されたときに、講師プロフィールの作成を
//! バックエンドへ依頼する内部サービス。
//!
//! ## 役割
//!
//! - **ゲート**: メールアドレスが検証済みのアカウントだけを対象にする
//! - **射影**: イベントを `{"uid", "email", "name"}` の依頼に変換する
//! - **best-effort 配信**: 1 回だけ POST し、失敗はログに残して握りつぶす
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Auth Provider│────▶│   Notifier   │────▶│   Backend    │
//! │ (user create)│     │ port: 13010  │     │ (profile API)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFIER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `NOTIFIER_PORT` | No | ポート番号（デフォルト: `13010`） |
//! | `LEC_BACKEND_CREATE_URL` | No | プロフィール作成エンドポイント（未設定で配信無効） |
//! | `LEC_BACKEND_API_KEY` | No | `X-API-KEY` ヘッダーの値（デフォルト: 空文字列） |
//! | `LEC_BACKEND_TIMEOUT_SECS` | No | リクエストタイムアウト秒数 |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p lecprov-notifier
//!
//! # 本番環境
//! LEC_BACKEND_CREATE_URL=https://... LOG_FORMAT=json cargo run -p lecprov-notifier --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use lecprov_notifier::{
    app_builder::{build_app, build_notifier},
    config::NotifierConfig,
    handler::EventState,
};
use lecprov_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;

/// Notifier サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("notifier");
    observability::init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = NotifierConfig::from_env()?;

    tracing::info!(
        delivery_enabled = config.backend.is_enabled(),
        create_url = config.backend.create_url.as_ref().map(url::Url::as_str),
        "Notifier サーバーを起動します: {}:{}",
        config.host,
        config.port
    );
    if !config.backend.is_enabled() {
        tracing::warn!("LEC_BACKEND_CREATE_URL が未設定のため、プロフィール作成依頼は送信されません");
    }

    let notifier = build_notifier(&config.backend)?;
    let app = build_app(Arc::new(EventState { notifier }));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Notifier サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Notifier サーバーを停止しました");
    Ok(())
}

/// SIGINT / SIGTERM を待つ
///
/// 処理中のリクエスト（送信待ち含む）は完了を待ってから停止する。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C ハンドラの登録に失敗");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT を受信、停止処理を開始します"),
        () = terminate => tracing::info!("SIGTERM を受信、停止処理を開始します"),
    }
}
