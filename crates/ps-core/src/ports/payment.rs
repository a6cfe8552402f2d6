use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the user pays for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Upi { upi_id: String },
    CashOnDelivery { pickup_location: String },
}

/// What the gateway is asked to collect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub currency: String,
    pub method: PaymentMethod,
    /// Free-form order context shown on the gateway's checkout surface.
    pub note: String,
}

/// The gateway's tri-state resolution. The core consumes nothing else of
/// the gateway's checkout UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded { reference: String },
    Cancelled,
    Failed { reason: String },
}

#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// Run one gateway round-trip. `Err` means the gateway itself was
    /// unreachable; a reachable gateway always resolves to an outcome.
    async fn initiate(&self, request: PaymentRequest) -> anyhow::Result<PaymentOutcome>;
}
