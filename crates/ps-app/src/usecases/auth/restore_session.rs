//! Use case for restoring the session at startup.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use ps_core::auth::AuthSession;
use ps_core::ports::SessionStorePort;
use ps_core::UserAccount;

use crate::persistence::keys;

#[derive(Debug, thiserror::Error)]
#[error("failed to restore session: {0}")]
pub struct RestoreSessionError(pub String);

/// Rebuild the session from the store without re-running verification.
/// A missing or unreadable session key means an anonymous session.
pub struct RestoreSession {
    store: Arc<dyn SessionStorePort>,
}

impl RestoreSession {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<AuthSession, RestoreSessionError> {
        let span = info_span!("usecase.restore_session.execute");

        async {
            let raw = self
                .store
                .get(keys::CURRENT_USER)
                .await
                .map_err(|e| RestoreSessionError(e.to_string()))?;

            let current_user: Option<UserAccount> = match raw {
                Some(raw) => serde_json::from_str(&raw)
                    .map_err(|e| RestoreSessionError(e.to_string()))?,
                None => None,
            };

            if let Some(user) = &current_user {
                info!(user = %user.id, "session restored");
            }
            Ok(AuthSession { current_user })
        }
        .instrument(span)
        .await
    }
}
