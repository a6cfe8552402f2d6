//! Use case for listing a user's placed orders.

use std::sync::Arc;

use tracing::{info_span, Instrument};

use ps_core::ids::UserId;
use ps_core::order::OrderRecord;
use ps_core::ports::OrderHistoryPort;

#[derive(Debug, thiserror::Error)]
#[error("failed to load orders: {0}")]
pub struct ListOrdersError(pub String);

pub struct ListOrders {
    history: Arc<dyn OrderHistoryPort>,
}

impl ListOrders {
    pub fn new(history: Arc<dyn OrderHistoryPort>) -> Self {
        Self { history }
    }

    /// Orders for `user`, oldest first.
    pub async fn execute(&self, user: &UserId) -> Result<Vec<OrderRecord>, ListOrdersError> {
        let span = info_span!("usecase.list_orders.execute");

        async {
            self.history
                .list_for(user)
                .await
                .map_err(|e| ListOrdersError(e.to_string()))
        }
        .instrument(span)
        .await
    }
}
