use async_trait::async_trait;

/// Key-value persistence scoped to the local browsing session.
///
/// Values survive a reload; sign-out removes only the keys it owns.
/// Writes happen after the in-memory mutation they mirror, never before.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
