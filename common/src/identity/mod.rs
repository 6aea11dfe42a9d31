//! Per-profile user identity.
//!
//! The identifier is an opaque string generated once and persisted through
//! an [`IdentityStore`] under [`IDENTITY_STORAGE_KEY`]. The frontend backs the
//! store with `window.localStorage`; tests use an in-memory map.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

/// Storage key of the persisted identifier.
pub const IDENTITY_STORAGE_KEY: &str = "legaledge_user_id";

/// Minimal capability over durable per-profile storage.
pub trait IdentityStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<S: IdentityStore + ?Sized> IdentityStore for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).write(key, value)
    }
}

/// Volatile store, for hosts without durable storage and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl IdentityStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Resolves the user identifier lazily and caches it for its own lifetime.
pub struct IdentityProvider<S> {
    store: Option<S>,
    secure: fn() -> Option<String>,
    fallback: fn() -> String,
    resolved: OnceCell<String>,
}

impl<S: IdentityStore> IdentityProvider<S> {
    /// `store` is `None` when the host has no durable storage; the provider
    /// then answers with an empty identifier.
    pub fn new(store: Option<S>) -> Self {
        Self {
            store,
            secure: secure_random_id,
            fallback: pseudo_random_id,
            resolved: OnceCell::new(),
        }
    }

    /// Replaces the secure random source. `None` from it selects the fallback.
    pub fn with_secure_source(mut self, secure: fn() -> Option<String>) -> Self {
        self.secure = secure;
        self
    }

    /// Replaces the generator used when no secure random source is available.
    pub fn with_fallback(mut self, fallback: fn() -> String) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the persisted identifier, creating and storing one on first use.
    pub fn get_or_create_user_id(&self) -> String {
        let Some(store) = &self.store else {
            return String::new();
        };
        self.resolved
            .get_or_init(|| {
                if let Some(existing) = store.read(IDENTITY_STORAGE_KEY).filter(|id| !id.is_empty()) {
                    return existing;
                }
                let created = (self.secure)().unwrap_or_else(|| {
                    tracing::warn!("no secure random source, using a pseudo-random identity");
                    (self.fallback)()
                });
                if let Err(err) = store.write(IDENTITY_STORAGE_KEY, &created) {
                    tracing::warn!("identity could not be persisted: {}", err);
                }
                created
            })
            .clone()
    }
}

/// A v4-shaped UUID from the platform's secure random source.
pub fn secure_random_id() -> Option<String> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).ok()?;
    Some(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
}

/// Non-cryptographic base-36 identifier.
pub fn pseudo_random_id() -> String {
    // RandomState is randomly keyed per instance.
    to_base36(RandomState::new().build_hasher().finish())
}

/// Renders `value` in base 36, lower-case.
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl IdentityStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("QuotaExceededError".to_string())
        }
    }

    #[test]
    fn identity_is_stable_across_calls() {
        let store = MemoryStore::default();
        let provider = IdentityProvider::new(Some(&store));

        let first = provider.get_or_create_user_id();
        let second = provider.get_or_create_user_id();

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(store.read(IDENTITY_STORAGE_KEY), Some(first.clone()));

        // a later session on the same profile reads it back
        let next_session = IdentityProvider::new(Some(&store));
        assert_eq!(next_session.get_or_create_user_id(), first);
    }

    #[test]
    fn existing_identity_is_reused() {
        let store = MemoryStore::default();
        store.write(IDENTITY_STORAGE_KEY, "u1").unwrap();
        let provider = IdentityProvider::new(Some(store));
        assert_eq!(provider.get_or_create_user_id(), "u1");
    }

    #[test]
    fn missing_storage_yields_empty_identity() {
        let provider: IdentityProvider<MemoryStore> = IdentityProvider::new(None);
        assert_eq!(provider.get_or_create_user_id(), "");
    }

    #[test]
    fn failed_write_still_returns_a_stable_identity() {
        let provider = IdentityProvider::new(Some(ReadOnlyStore));
        let first = provider.get_or_create_user_id();
        assert!(!first.is_empty());
        assert_eq!(provider.get_or_create_user_id(), first);
    }

    fn no_secure_source() -> Option<String> {
        None
    }

    fn fixed_fallback() -> String {
        "k3x9q".to_string()
    }

    #[test]
    fn fallback_identity_is_used_without_secure_source() {
        let store = MemoryStore::default();
        let provider = IdentityProvider::new(Some(&store))
            .with_secure_source(no_secure_source)
            .with_fallback(fixed_fallback);

        assert_eq!(provider.get_or_create_user_id(), "k3x9q");
        assert_eq!(store.read(IDENTITY_STORAGE_KEY), Some("k3x9q".to_string()));
        assert_eq!(provider.get_or_create_user_id(), "k3x9q");

        // the persisted value wins over a fresh fallback on the next session
        let next_session = IdentityProvider::new(Some(&store))
            .with_secure_source(no_secure_source)
            .with_fallback(pseudo_random_id);
        assert_eq!(next_session.get_or_create_user_id(), "k3x9q");
    }

    #[test]
    fn secure_source_is_preferred_over_fallback() {
        let provider = IdentityProvider::new(Some(MemoryStore::default()))
            .with_secure_source(|| Some("secure-id".to_string()))
            .with_fallback(fixed_fallback);
        assert_eq!(provider.get_or_create_user_id(), "secure-id");
    }

    #[test]
    fn secure_ids_are_uuid_shaped() {
        let id = secure_random_id().unwrap();
        assert_eq!(id.len(), 36);
        assert_eq!(uuid::Uuid::parse_str(&id).unwrap().get_version_num(), 4);
    }

    #[test]
    fn base36_rendering() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert!(!pseudo_random_id().is_empty());
        assert_ne!(pseudo_random_id(), pseudo_random_id());
    }
}
