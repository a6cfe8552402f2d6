//! Session-store keys and JSON helpers shared by the use cases.

use ps_core::ports::SessionStorePort;

/// Store keys: `user` holds the signed-in account, `users` the account
/// directory, `otps` the pending-code ledger. Sign-out removes only `user`.
pub mod keys {
    pub const CURRENT_USER: &str = "user";
    pub const USER_DIRECTORY: &str = "users";
    pub const OTP_LEDGER: &str = "otps";
}

pub(crate) async fn load_json<T>(store: &dyn SessionStorePort, key: &str) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    match store.get(key).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    }
}

pub(crate) async fn save_json<T>(
    store: &dyn SessionStorePort,
    key: &str,
    value: &T,
) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    store.set(key, &serde_json::to_string(value)?).await
}
