use async_trait::async_trait;
use tracing::info;

use ps_core::ports::OtpDeliveryPort;

/// Stand-in for a real mail channel: the code is surfaced in the local
/// log, the way the demo build surfaces it in a toast.
pub struct LogOtpChannel;

#[async_trait]
impl OtpDeliveryPort for LogOtpChannel {
    async fn deliver(&self, email: &str, code: &str) -> anyhow::Result<()> {
        info!(%email, code, "sign-in code ready");
        Ok(())
    }
}
