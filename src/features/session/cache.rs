//! Browser-local copy of the last known admin record.
//!
//! The cache only pre-fills display fields. It is written when a login or a
//! profile change succeeds and evicted when a session check fails; it is never
//! consulted to decide whether the admin is authenticated.

use crate::{app_lib::storage, features::session::types::UserRecord};

/// localStorage key holding the serialized admin record.
pub const USER_CACHE_KEY: &str = "admin_user";

/// Storage slot for the cached admin record.
pub trait UserCache {
    /// Returns the cached record, or `None` if absent or unreadable.
    fn load(&self) -> Option<UserRecord>;
    /// Replaces the cached record wholesale.
    fn store(&self, user: &UserRecord);
    /// Removes the cached record.
    fn evict(&self);
}

/// `UserCache` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCache;

impl UserCache for LocalStorageCache {
    fn load(&self) -> Option<UserRecord> {
        storage::load_json(USER_CACHE_KEY)
    }

    fn store(&self, user: &UserRecord) {
        storage::save_json(USER_CACHE_KEY, user);
    }

    fn evict(&self) {
        storage::remove(USER_CACHE_KEY);
    }
}

/// In-memory cache holding the serialized JSON, mirroring localStorage.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryUserCache {
    slot: std::cell::RefCell<Option<String>>,
    evictions: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryUserCache {
    pub fn with_raw(raw: &str) -> Self {
        let cache = Self::default();
        cache.slot.replace(Some(raw.to_string()));
        cache
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn evictions(&self) -> usize {
        self.evictions.get()
    }
}

#[cfg(test)]
impl UserCache for MemoryUserCache {
    fn load(&self) -> Option<UserRecord> {
        let raw = self.slot.borrow().clone()?;
        storage::decode(USER_CACHE_KEY, &raw)
    }

    fn store(&self, user: &UserRecord) {
        let raw = serde_json::to_string(user).ok();
        self.slot.replace(raw);
    }

    fn evict(&self) {
        self.evictions.set(self.evictions.get() + 1);
        self.slot.replace(None);
    }
}
