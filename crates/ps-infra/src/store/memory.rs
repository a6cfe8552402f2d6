use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ps_core::ports::SessionStorePort;

/// In-memory session store for tests and ephemeral runs.
///
/// Nothing survives drop; use [`super::FileSessionStore`] when state must
/// outlive the process.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorePort for MemorySessionStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.inner
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.inner.write().await.remove(key);
        Ok(())
    }
}
