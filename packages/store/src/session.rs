//! # Session persistence
//!
//! The authenticated [`Session`] lives as one JSON blob under a single key
//! (default `ctn-user`). Reads and writes go through the [`SessionStorage`] trait,
//! so the same [`SessionStore`] logic runs against browser local storage, a file
//! under the platform data directory, or an in-memory map in tests.
//!
//! ## Backends
//!
//! | Type | Target | Location |
//! |------|--------|----------|
//! | [`crate::MemoryStorage`] | any | process memory |
//! | [`crate::FileStorage`] | native | `<data_dir>/ctn/<key>.json` |
//! | [`crate::LocalStorage`] | wasm + `web` | `window.localStorage[<key>]` |
//!
//! Storage failures are swallowed: a backend that cannot read reports `None`,
//! one that cannot write drops the value. The session is then simply absent.
//!
//! ## Hydration
//!
//! [`SessionStore::hydrate`] reads the blob once at startup. Anything that does
//! not parse as a [`Session`], or parses with an empty `_id` or `email`, is
//! discarded and the key is cleared.

use crate::models::Session;

/// Raw string storage for the session blob.
pub trait SessionStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// Current session plus the storage it is mirrored to.
#[derive(Clone, Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    key: String,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Build a store and hydrate it from `storage`.
    pub fn hydrate(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match storage.load(&key) {
            None => None,
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) if session.is_well_formed() => {
                    tracing::info!(email = %session.email, role = %session.role, "session restored");
                    Some(session)
                }
                Ok(_) => {
                    tracing::warn!(key = %key, "stored session is missing id or email, discarding");
                    storage.clear(&key);
                    None
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "stored session is not valid JSON, discarding");
                    storage.clear(&key);
                    None
                }
            },
        };
        Self {
            storage,
            key,
            current,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the session and persist it.
    pub fn set(&mut self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(json) => self.storage.save(&self.key, &json),
            Err(e) => tracing::error!(error = %e, "failed to serialise session"),
        }
        tracing::info!(email = %session.email, role = %session.role, "session started");
        self.current = Some(session);
    }

    /// Drop the session and its persisted copy.
    pub fn clear(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!(email = %session.email, "session ended");
        }
        self.storage.clear(&self.key);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStorage;

    const KEY: &str = "ctn-user";

    fn session() -> Session {
        Session {
            id: "u1".into(),
            fullname: "Amel Ben Salah".into(),
            email: "amel@ctn.tn".into(),
            role: Role::Customer,
            action: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_set_persists_and_rehydrates() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::hydrate(storage.clone(), KEY);
        assert!(store.current().is_none());

        store.set(session());
        let raw = storage.load(KEY).unwrap();
        assert!(raw.contains("\"_id\":\"u1\""));

        let again = SessionStore::hydrate(storage, KEY);
        assert_eq!(again.current(), Some(&session()));
    }

    #[test]
    fn test_malformed_blobs_are_discarded() {
        let payloads = [
            "not json",
            r#"{"fullname":"x","email":"a@b.tn","role":"customer"}"#,
            r#"{"_id":"","email":"a@b.tn","role":"customer"}"#,
            r#"{"_id":"u1","email":"  ","role":"admin"}"#,
            r#"{"_id":"u1","email":"a@b.tn","role":"pilot"}"#,
            "[]",
        ];
        for payload in payloads {
            let storage = MemoryStorage::new();
            storage.save(KEY, payload);
            let store = SessionStore::hydrate(storage.clone(), KEY);
            assert!(store.current().is_none(), "accepted {payload}");
            assert!(storage.load(KEY).is_none(), "kept {payload}");
        }
    }

    #[test]
    fn test_clear_removes_blob() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::hydrate(storage.clone(), KEY);
        store.set(session());
        store.clear();
        assert!(!store.is_authenticated());
        assert!(storage.load(KEY).is_none());
        // clearing twice is harmless
        store.clear();
    }
}
