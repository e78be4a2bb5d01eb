//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! lecprov-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lecprov_domain::provisioning::{DeliveryFailure, ProfileCreationRequest};

use crate::profile_backend::ProfileBackend;

// ===== MockProfileBackend =====

/// 受け取った依頼を記録するモック
///
/// `failing()` で作成すると、記録したうえで指定の失敗を返す。
#[derive(Clone, Default)]
pub struct MockProfileBackend {
    requests: Arc<Mutex<Vec<ProfileCreationRequest>>>,
    failure:  Option<DeliveryFailure>,
}

impl MockProfileBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: DeliveryFailure) -> Self {
        Self {
            requests: Arc::default(),
            failure:  Some(failure),
        }
    }

    /// これまでに受け取った依頼
    pub fn requests(&self) -> Vec<ProfileCreationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileBackend for MockProfileBackend {
    async fn create_profile(
        &self,
        request: &ProfileCreationRequest,
    ) -> Result<(), DeliveryFailure> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}
