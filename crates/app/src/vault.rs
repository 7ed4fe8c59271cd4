use client::TokenVault;
use std::sync::Arc;

/// Durable storage for the running platform: browser local storage on the
/// web, an in-memory map elsewhere (the session then simply does not
/// survive a restart, which is the `remember = false` behavior anyway).
pub fn platform_vault() -> Arc<dyn TokenVault> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(WebVault)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(client::MemoryVault::new())
    }
}

/// Local-storage vault. Stateless: the storage handle is re-fetched per
/// call because it is not safe to hold across threads.
#[cfg(target_arch = "wasm32")]
struct WebVault;

#[cfg(target_arch = "wasm32")]
impl WebVault {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenVault for WebVault {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
