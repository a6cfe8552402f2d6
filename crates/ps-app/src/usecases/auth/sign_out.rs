//! Use case for ending the authenticated session.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use ps_core::auth::AuthSession;
use ps_core::ports::SessionStorePort;

use crate::persistence::keys;

#[derive(Debug, thiserror::Error)]
#[error("sign out failed: {0}")]
pub struct SignOutError(pub String);

/// Clear the current user and remove the session key.
///
/// Only the session key is touched; accounts and order history stay.
pub struct SignOut {
    store: Arc<dyn SessionStorePort>,
}

impl SignOut {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, session: &mut AuthSession) -> Result<(), SignOutError> {
        let span = info_span!("usecase.sign_out.execute");

        async {
            session.sign_out();
            self.store
                .remove(keys::CURRENT_USER)
                .await
                .map_err(|e| SignOutError(e.to_string()))?;

            info!("signed out");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
