//! Use case for verifying a sign-in code and establishing the session.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use ps_core::auth::{
    check_email_domain, AuthSession, DomainRejected, OtpLedger, UserDirectory, VerifyError,
};
use ps_core::ports::{ClockPort, SessionStorePort};
use ps_core::UserAccount;

use crate::persistence::{keys, load_json, save_json};

#[derive(Debug, thiserror::Error)]
pub enum VerifySignInCodeError {
    #[error(transparent)]
    DomainRejected(#[from] DomainRejected),

    #[error(transparent)]
    Verify(#[from] VerifyError),

    #[error("failed to verify sign-in code: {0}")]
    StoreFailed(String),
}

/// Check the submitted code against the pending ledger; on a match,
/// consume it, look up or create the account and sign the session in.
///
/// Every ledger mutation (consumption on success, purge on expiry) is
/// persisted before the verdict is acted on.
pub struct VerifySignInCode {
    store: Arc<dyn SessionStorePort>,
    clock: Arc<dyn ClockPort>,
    allowed_suffix: String,
}

impl VerifySignInCode {
    pub fn new(
        store: Arc<dyn SessionStorePort>,
        clock: Arc<dyn ClockPort>,
        allowed_suffix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            clock,
            allowed_suffix: allowed_suffix.into(),
        }
    }

    pub async fn execute(
        &self,
        email: &str,
        code: &str,
        session: &mut AuthSession,
    ) -> Result<UserAccount, VerifySignInCodeError> {
        let span = info_span!("usecase.verify_sign_in_code.execute");

        async {
            // Safety net: the domain gate holds on verify as well.
            check_email_domain(email, &self.allowed_suffix)?;

            let mut ledger: OtpLedger = load_json(self.store.as_ref(), keys::OTP_LEDGER)
                .await
                .map_err(|e| VerifySignInCodeError::StoreFailed(e.to_string()))?;

            let verdict = ledger.verify(email, code, self.clock.now());

            // Success consumes the entry and expiry purges it; a mismatch
            // leaves the ledger as it was.
            if matches!(verdict, Ok(()) | Err(VerifyError::Expired)) {
                save_json(self.store.as_ref(), keys::OTP_LEDGER, &ledger)
                    .await
                    .map_err(|e| VerifySignInCodeError::StoreFailed(e.to_string()))?;
            }
            verdict?;

            let mut directory: UserDirectory = load_json(self.store.as_ref(), keys::USER_DIRECTORY)
                .await
                .map_err(|e| VerifySignInCodeError::StoreFailed(e.to_string()))?;

            let (account, created) = directory.find_or_create(email);
            if created {
                save_json(self.store.as_ref(), keys::USER_DIRECTORY, &directory)
                    .await
                    .map_err(|e| VerifySignInCodeError::StoreFailed(e.to_string()))?;
                info!(user = %account.id, "account created");
            }

            session.sign_in(account.clone());
            save_json(self.store.as_ref(), keys::CURRENT_USER, &account)
                .await
                .map_err(|e| VerifySignInCodeError::StoreFailed(e.to_string()))?;

            info!(user = %account.id, "signed in");
            Ok(account)
        }
        .instrument(span)
        .await
    }
}
