use async_trait::async_trait;

/// Out-of-band delivery of a sign-in code.
///
/// Fire-and-forget: the flow never waits on a delivery confirmation.
#[async_trait]
pub trait OtpDeliveryPort: Send + Sync {
    async fn deliver(&self, email: &str, code: &str) -> anyhow::Result<()>;
}
