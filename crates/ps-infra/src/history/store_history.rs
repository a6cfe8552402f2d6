//! Order history kept in the session store.
//!
//! Each user's placed orders live under one key as a JSON list; append
//! loads, pushes and writes back, so the store stays the single source of
//! truth across reloads.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use ps_core::ids::UserId;
use ps_core::order::OrderRecord;
use ps_core::ports::{OrderHistoryPort, SessionStorePort};

const ORDERS_KEY_PREFIX: &str = "orders/";

pub struct StoreOrderHistory {
    store: Arc<dyn SessionStorePort>,
}

impl StoreOrderHistory {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    fn key_for(user: &UserId) -> String {
        format!("{ORDERS_KEY_PREFIX}{user}")
    }

    async fn load(&self, key: &str) -> Result<Vec<OrderRecord>> {
        match self.store.get(key).await? {
            Some(raw) => serde_json::from_str(&raw).context("decode order history failed"),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl OrderHistoryPort for StoreOrderHistory {
    async fn append(&self, user: &UserId, record: &OrderRecord) -> Result<()> {
        let key = Self::key_for(user);
        let mut records = self.load(&key).await?;
        records.push(record.clone());

        let raw = serde_json::to_string(&records).context("serialize order history failed")?;
        self.store.set(&key, &raw).await
    }

    async fn list_for(&self, user: &UserId) -> Result<Vec<OrderRecord>> {
        self.load(&Self::key_for(user)).await
    }
}
