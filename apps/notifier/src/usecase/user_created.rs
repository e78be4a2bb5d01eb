//! # アカウント作成通知
//!
//! アカウント作成イベント → ゲート判定 → 依頼の組み立て → 送信 → （失敗時）ログ記録、
//! を一直線に行う。
//!
//! ## 契約
//!
//! [`UserCreatedNotifier::handle`] は `()` を返し、送信に失敗しても呼び出し元へ
//! エラーを伝播しない。プロフィール作成の通知はアカウント作成を妨げてはならない。
//! 失敗した依頼は再送されず、ログにのみ残る。

use std::sync::Arc;

use lecprov_domain::user::UserCreatedEvent;
use lecprov_infra::ProfileBackend;
use lecprov_shared::{
    event_log::{error, event},
    log_business_event,
};

/// スキップ理由（`skip.reason` フィールドの値）
mod skip_reason {
    pub const EMAIL_NOT_VERIFIED: &str = "email_not_verified";
    pub const DELIVERY_DISABLED: &str = "delivery_disabled";
}

/// アカウント作成通知
///
/// 起動時に 1 度だけ組み立て、全リクエストで共有する。
/// 送信先が無い（`LEC_BACKEND_CREATE_URL` 未設定）場合は配信無効。
pub struct UserCreatedNotifier {
    backend: Option<Arc<dyn ProfileBackend>>,
}

impl UserCreatedNotifier {
    /// 送信先を指定して作成する
    pub fn new(backend: Arc<dyn ProfileBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// 配信無効（どこにも送信しない）で作成する
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// 配信が有効か
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// アカウント作成イベントを処理する（fire-and-forget）
    ///
    /// 1. 検証済みメールが無ければ何もしない
    /// 2. 配信無効なら何もしない
    /// 3. 依頼を組み立てて 1 回だけ送信する
    /// 4. 送信失敗はログに記録して握りつぶす
    pub async fn handle(&self, user_event: &UserCreatedEvent) {
        let Some(request) = user_event.to_profile_request() else {
            log_business_event!(
                event.category = event::category::PROFILE,
                event.action = event::action::PROFILE_PROVISIONING_SKIPPED,
                event.entity_type = event::entity_type::USER,
                event.entity_id = %user_event.uid,
                event.result = event::result::SKIPPED,
                skip.reason = skip_reason::EMAIL_NOT_VERIFIED,
                "検証済みメールが無いためプロフィール作成依頼をスキップ"
            );
            return;
        };

        let Some(backend) = &self.backend else {
            log_business_event!(
                event.category = event::category::PROFILE,
                event.action = event::action::PROFILE_PROVISIONING_SKIPPED,
                event.entity_type = event::entity_type::USER,
                event.entity_id = %user_event.uid,
                event.result = event::result::SKIPPED,
                skip.reason = skip_reason::DELIVERY_DISABLED,
                "送信先が未設定のためプロフィール作成依頼をスキップ"
            );
            return;
        };

        match backend.create_profile(&request).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::PROFILE,
                    event.action = event::action::PROFILE_PROVISIONING_REQUESTED,
                    event.entity_type = event::entity_type::USER,
                    event.entity_id = %request.uid,
                    event.result = event::result::SUCCESS,
                    "プロフィール作成依頼を送信"
                );
            }
            Err(e) => {
                tracing::error!(
                    event.category = event::category::PROFILE,
                    event.action = event::action::PROFILE_PROVISIONING_FAILED,
                    event.entity_type = event::entity_type::USER,
                    event.entity_id = %request.uid,
                    event.result = event::result::FAILURE,
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::SERVICE_COMMUNICATION,
                    error = %e,
                    "プロフィール作成依頼の送信に失敗"
                );
            }
        }
    }
}
