//! Platform-specific constructors.
//!
//! The session blob lives in:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop / native**: one JSON file under `<data_dir>/ctn/` via [`store::FileStorage`]
//! - anything else: process memory via [`store::MemoryStorage`]

use store::{ClientConfig, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

pub fn make_session_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("ctn");
        store::FileStorage::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
}

/// Hydrate the session store under the configured key.
pub fn make_session_store(config: &ClientConfig) -> SessionStore<PlatformStorage> {
    SessionStore::hydrate(make_session_storage(), config.session.storage_key.clone())
}

pub fn make_backend(config: &ClientConfig) -> api::RestBackend {
    api::RestBackend::new(config.api.base_url.clone())
}
