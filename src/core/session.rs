//! Auth session persistence
//!
//! Keeps the last successful auth response, stamped with the time it was
//! stored, in a single storage slot. Each save replaces the slot entirely.
//! A slot that no longer deserializes is dropped on read.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::core::auth::AuthResponse;
use crate::core::storage::{KeyValueStore, MemoryStore};

/// Storage key for the auth session
pub const STORAGE_KEY: &str = "omocha-bako.auth";

const STORED_AT_FIELD: &str = "storedAt";

/// Auth response as persisted on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAuthSession {
    #[serde(flatten)]
    pub auth: AuthResponse,
    #[serde(rename = "storedAt")]
    pub stored_at: DateTime<Utc>,
}

impl StoredAuthSession {
    pub fn new(mut auth: AuthResponse, stored_at: DateTime<Utc>) -> Self {
        // storedAt is ours; never serialize it twice
        auth.extra.remove(STORED_AT_FIELD);
        Self { auth, stored_at }
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        self.auth.authorization_header()
    }

    /// When the session was stored, in local time
    pub fn stored_at_label(&self) -> String {
        self.stored_at
            .with_timezone(&Local)
            .format("%Y/%m/%d %H:%M:%S")
            .to_string()
    }
}

/// Single-slot session store over an optional key-value backend
#[derive(Clone)]
pub struct SessionStore {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("available", &self.is_available())
            .finish()
    }
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Some(Arc::new(backend)),
        }
    }

    /// Store without a backend; every operation is a no-op
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Store backed by a fresh in-memory map
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Store backed by `window.localStorage`
    #[cfg(feature = "hydrate")]
    pub fn browser() -> Self {
        Self::new(crate::core::storage::LocalStorage)
    }

    pub fn is_available(&self) -> bool {
        self.backend().is_some()
    }

    fn backend(&self) -> Option<&dyn KeyValueStore> {
        self.backend
            .as_deref()
            .filter(|backend| backend.is_available())
    }

    /// Persist `auth`, replacing whatever was stored before
    pub fn save(&self, auth: &AuthResponse) {
        let Some(backend) = self.backend() else {
            return;
        };

        let session = StoredAuthSession::new(auth.clone(), Utc::now());
        let json = match serde_json::to_string(&session) {
            Ok(json) => json,
            Err(e) => {
                leptos::logging::warn!("Failed to serialize auth session: {}", e);
                return;
            }
        };

        if let Err(e) = backend.set(STORAGE_KEY, &json) {
            leptos::logging::warn!("Failed to persist auth session: {}", e);
        }
    }

    /// Read the stored session, dropping it if it is corrupted
    pub fn load(&self) -> Option<StoredAuthSession> {
        let backend = self.backend()?;
        let raw = backend.get(STORAGE_KEY)?;
        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<StoredAuthSession>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("Failed to parse stored auth session: {}", e);
                backend.remove(STORAGE_KEY);
                None
            }
        }
    }

    /// Forget the stored session. Safe to call when nothing is stored.
    pub fn clear(&self) {
        if let Some(backend) = self.backend() {
            backend.remove(STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::StorageError;
    use serde_json::json;

    fn sample_auth() -> AuthResponse {
        AuthResponse::new("Bearer", "tok", 3600, "r")
    }

    fn memory_session_store() -> (MemoryStore, SessionStore) {
        let memory = MemoryStore::new();
        (memory.clone(), SessionStore::new(memory))
    }

    /// Backend that reports itself unusable
    struct BlockedStore;

    impl KeyValueStore for BlockedStore {
        fn is_available(&self) -> bool {
            false
        }

        fn get(&self, _key: &str) -> Option<String> {
            panic!("blocked store must not be read");
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            panic!("blocked store must not be written");
        }

        fn remove(&self, _key: &str) {
            panic!("blocked store must not be modified");
        }
    }

    /// Backend whose writes always fail, like a full localStorage
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }

        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_, store) = memory_session_store();
        let before = Utc::now();

        store.save(&sample_auth());
        let loaded = store.load().expect("session should be stored");

        assert_eq!(loaded.auth, sample_auth());
        assert!(loaded.stored_at >= before);
        assert!(loaded.stored_at <= Utc::now());
    }

    #[test]
    fn test_save_preserves_extra_fields() {
        let (memory, store) = memory_session_store();
        let mut auth = sample_auth();
        auth.extra.insert("userId".to_string(), json!("42"));
        auth.extra.insert("scopes".to_string(), json!(["read", "write"]));

        store.save(&auth);

        let raw: serde_json::Value =
            serde_json::from_str(&memory.get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(raw["userId"], "42");
        assert_eq!(raw["accessToken"], "tok");
        assert!(raw["storedAt"].is_string());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.auth, auth);
    }

    #[test]
    fn test_stored_at_is_iso_timestamp() {
        let (memory, store) = memory_session_store();

        store.save(&sample_auth());

        let raw: serde_json::Value =
            serde_json::from_str(&memory.get(STORAGE_KEY).unwrap()).unwrap();
        let stored_at = raw["storedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stored_at).is_ok());
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let (memory, store) = memory_session_store();
        let mut first = sample_auth();
        first.extra.insert("only_in_first".to_string(), json!(true));

        store.save(&first);
        store.save(&AuthResponse::new("Bearer", "second", 60, "r2"));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.auth.access_token, "second");
        assert!(loaded.auth.extra.is_empty());
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_load_corrupted_session_is_removed() {
        let (memory, store) = memory_session_store();
        memory.set(STORAGE_KEY, "not-json").unwrap();

        assert!(store.load().is_none());
        assert!(!memory.contains_key(STORAGE_KEY));
    }

    #[test]
    fn test_load_session_missing_token_is_removed() {
        let (memory, store) = memory_session_store();
        memory
            .set(STORAGE_KEY, r#"{"tokenType":"Bearer","storedAt":"2025-01-01T00:00:00Z"}"#)
            .unwrap();

        assert!(store.load().is_none());
        assert!(!memory.contains_key(STORAGE_KEY));
    }

    #[test]
    fn test_load_accepts_millisecond_timestamps() {
        let (memory, store) = memory_session_store();
        memory
            .set(
                STORAGE_KEY,
                r#"{"tokenType":"Bearer","accessToken":"tok","expiresIn":3600,"refreshToken":"r","storedAt":"2025-01-01T12:30:00.000Z"}"#,
            )
            .unwrap();

        let loaded = store.load().unwrap();

        assert_eq!(loaded.stored_at.to_rfc3339(), "2025-01-01T12:30:00+00:00");
        assert!(loaded.auth.extra.is_empty());
    }

    #[test]
    fn test_load_without_session() {
        let (_, store) = memory_session_store();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (memory, store) = memory_session_store();

        store.clear();
        store.save(&sample_auth());
        store.clear();
        store.clear();

        assert!(!memory.contains_key(STORAGE_KEY));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_unavailable_store_is_a_no_op() {
        let store = SessionStore::unavailable();

        store.save(&sample_auth());
        store.clear();

        assert!(!store.is_available());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_blocked_backend_is_never_touched() {
        let store = SessionStore::new(BlockedStore);

        store.save(&sample_auth());
        store.clear();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let store = SessionStore::new(FullStore);

        store.save(&sample_auth());

        assert!(store.load().is_none());
    }

    #[test]
    fn test_authorization_header_from_session() {
        let session = StoredAuthSession::new(sample_auth(), Utc::now());

        assert_eq!(session.authorization_header(), "Bearer tok");
    }

    #[test]
    fn test_stored_at_label_format() {
        let session = StoredAuthSession::new(sample_auth(), Utc::now());

        let label = session.stored_at_label();

        assert_eq!(label.len(), "2025/01/01 00:00:00".len());
        assert_eq!(&label[4..5], "/");
    }

    #[test]
    fn test_new_drops_conflicting_stored_at() {
        let mut auth = sample_auth();
        auth.extra.insert("storedAt".to_string(), json!("bogus"));

        let session = StoredAuthSession::new(auth, Utc::now());
        let json = serde_json::to_string(&session).unwrap();

        assert_eq!(json.matches("storedAt").count(), 1);
        assert!(serde_json::from_str::<StoredAuthSession>(&json).is_ok());
    }
}
