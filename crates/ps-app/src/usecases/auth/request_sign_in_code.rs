//! Use case for requesting a sign-in code.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use ps_core::auth::{check_email_domain, generate_code, DomainRejected, OtpLedger};
use ps_core::ports::{ClockPort, OtpDeliveryPort, SessionStorePort};

use crate::persistence::{keys, load_json, save_json};

#[derive(Debug, thiserror::Error)]
pub enum RequestSignInCodeError {
    #[error(transparent)]
    DomainRejected(#[from] DomainRejected),

    #[error("failed to issue sign-in code: {0}")]
    IssueFailed(String),
}

/// Gate the email against the institutional domain, generate a fresh code,
/// persist the updated ledger and hand the code to the delivery channel.
///
/// A repeated request replaces the pending code and restarts its window.
pub struct RequestSignInCode {
    store: Arc<dyn SessionStorePort>,
    delivery: Arc<dyn OtpDeliveryPort>,
    clock: Arc<dyn ClockPort>,
    allowed_suffix: String,
}

impl RequestSignInCode {
    pub fn new(
        store: Arc<dyn SessionStorePort>,
        delivery: Arc<dyn OtpDeliveryPort>,
        clock: Arc<dyn ClockPort>,
        allowed_suffix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            delivery,
            clock,
            allowed_suffix: allowed_suffix.into(),
        }
    }

    pub async fn execute(&self, email: &str) -> Result<(), RequestSignInCodeError> {
        let span = info_span!("usecase.request_sign_in_code.execute");

        async {
            // Rejected before any code exists.
            check_email_domain(email, &self.allowed_suffix)?;

            let mut ledger: OtpLedger = load_json(self.store.as_ref(), keys::OTP_LEDGER)
                .await
                .map_err(|e| RequestSignInCodeError::IssueFailed(e.to_string()))?;

            let code = generate_code();
            ledger.issue(email, code.clone(), self.clock.now());

            save_json(self.store.as_ref(), keys::OTP_LEDGER, &ledger)
                .await
                .map_err(|e| RequestSignInCodeError::IssueFailed(e.to_string()))?;

            info!("sign-in code issued");

            // Fire-and-forget: the flow never waits on delivery confirmation.
            if let Err(error) = self.delivery.deliver(email, &code).await {
                warn!(%error, "sign-in code delivery failed");
            }

            Ok(())
        }
        .instrument(span)
        .await
    }
}
