//! Payment gateway stand-in.
//!
//! Real settlement happens inside the provider's checkout UI; this
//! adapter models only the outcome the core consumes: wait out a short
//! settlement delay, then resolve.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use ps_core::ports::{PaymentGatewayPort, PaymentOutcome, PaymentRequest};

/// What the simulated settlement resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleAs {
    Approve,
    Cancel,
    Fail(String),
}

pub struct SimulatedGateway {
    settle_delay: Duration,
    settle_as: SettleAs,
}

impl SimulatedGateway {
    pub fn new(settle_delay: Duration, settle_as: SettleAs) -> Self {
        Self {
            settle_delay,
            settle_as,
        }
    }

    /// The demo default: approve after a short settlement pause.
    pub fn approving() -> Self {
        Self::new(Duration::from_millis(1500), SettleAs::Approve)
    }

    /// Resolve immediately; for tests.
    pub fn instant(settle_as: SettleAs) -> Self {
        Self::new(Duration::ZERO, settle_as)
    }
}

#[async_trait]
impl PaymentGatewayPort for SimulatedGateway {
    async fn initiate(&self, _request: PaymentRequest) -> anyhow::Result<PaymentOutcome> {
        sleep(self.settle_delay).await;

        Ok(match &self.settle_as {
            SettleAs::Approve => PaymentOutcome::Succeeded {
                reference: format!("sim-{}", uuid::Uuid::new_v4()),
            },
            SettleAs::Cancel => PaymentOutcome::Cancelled,
            SettleAs::Fail(reason) => PaymentOutcome::Failed {
                reason: reason.clone(),
            },
        })
    }
}
