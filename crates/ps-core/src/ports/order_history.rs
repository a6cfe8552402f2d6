use async_trait::async_trait;

use crate::ids::UserId;
use crate::order::record::OrderRecord;

/// Per-user archive of placed orders.
#[async_trait]
pub trait OrderHistoryPort: Send + Sync {
    async fn append(&self, user: &UserId, record: &OrderRecord) -> anyhow::Result<()>;

    /// Orders for `user`, oldest first.
    async fn list_for(&self, user: &UserId) -> anyhow::Result<Vec<OrderRecord>>;
}
