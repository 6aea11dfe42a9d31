//! `localStorage`-backed user identity.

use docgen_common::identity::{to_base36, IdentityProvider, IdentityStore};
use web_sys::Storage;

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// `None` when the page has no window or storage is disabled.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl IdentityStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage
            .set_item(key, value)
            .map_err(|err| format!("{:?}", err))
    }
}

thread_local! {
    static IDENTITY: IdentityProvider<LocalStorageStore> =
        IdentityProvider::new(LocalStorageStore::open()).with_fallback(math_random_id);
}

/// The identifier of this browser profile, created on first use.
pub fn user_id() -> String {
    IDENTITY.with(IdentityProvider::get_or_create_user_id)
}

fn math_random_id() -> String {
    to_base36((js_sys::Math::random() * u64::MAX as f64) as u64)
}
