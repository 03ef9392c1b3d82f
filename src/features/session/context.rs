//! Explicit session context for the admin area.
//!
//! The context owns the last identity the API confirmed and the browser-local
//! user cache. It is created once at the application root and handed to the
//! guard and the profile panel; nothing else reads or writes the cache.

use crate::{
    app_lib::AppError,
    features::session::{cache::UserCache, client::IdentityApi, types::UserRecord},
};
use tracing::{debug, warn};

/// Outcome of one identity check.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    Allowed(UserRecord),
    Denied,
}

#[derive(Clone, Debug, Default)]
pub struct SessionContext<C> {
    cache: C,
    user: Option<UserRecord>,
}

impl<C: UserCache> SessionContext<C> {
    /// Starts with no confirmed user; the cache is not trusted for auth.
    pub fn new(cache: C) -> Self {
        Self { cache, user: None }
    }

    /// The user confirmed by the last successful check, login, or update.
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Email used to pre-fill forms: the confirmed user first, then the cache.
    pub fn known_email(&self) -> String {
        self.user
            .as_ref()
            .map(|user| user.email.clone())
            .or_else(|| self.cache.load().map(|user| user.email))
            .unwrap_or_default()
    }

    /// Runs one identity check and applies its result.
    pub async fn refresh<A: IdentityApi>(&mut self, api: &A) -> GuardDecision {
        let result = api.check().await;
        self.apply_check(result)
    }

    /// Applies an identity check result. Every failure is a denial, and a
    /// denial always evicts the cached record.
    pub fn apply_check(&mut self, result: Result<UserRecord, AppError>) -> GuardDecision {
        match result {
            Ok(user) => {
                debug!("session check passed");
                self.user = Some(user.clone());
                GuardDecision::Allowed(user)
            }
            Err(err) => {
                warn!(
                    unauthenticated = err.is_unauthenticated(),
                    error = %err,
                    "session check failed"
                );
                self.invalidate();
                GuardDecision::Denied
            }
        }
    }

    /// Forgets the confirmed user and evicts the cached record.
    pub fn invalidate(&mut self) {
        self.user = None;
        self.cache.evict();
    }

    /// Overwrites the cached record and the confirmed user with `user`.
    pub fn replace_user(&mut self, user: UserRecord) {
        self.cache.store(&user);
        self.user = Some(user);
    }
}
