//! One-shot session gate for protected pages.
//!
//! A guard starts `Pending` and resolves exactly once to `Allowed` or
//! `Denied`; later resolutions are ignored, so a mounted guard never
//! re-checks or flips. Navigation is not performed here: the view layer reads
//! [`redirect_target`] and performs the redirect as a separate effect.

use crate::{features::session::context::GuardDecision, routes::paths};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Pending,
    Allowed,
    Denied,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionGuard {
    state: GuardState,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Records the outcome of the identity check. Returns the new state, or
    /// `None` when the guard had already resolved.
    pub fn resolve(&mut self, decision: &GuardDecision) -> Option<GuardState> {
        if self.state != GuardState::Pending {
            return None;
        }

        self.state = match decision {
            GuardDecision::Allowed(_) => GuardState::Allowed,
            GuardDecision::Denied => GuardState::Denied,
        };
        Some(self.state)
    }
}

/// Where the navigation effect should send the browser for a guard state.
/// Denial always goes to the login page, whatever the failure cause.
pub fn redirect_target(state: GuardState) -> Option<&'static str> {
    match state {
        GuardState::Denied => Some(paths::ADMIN_LOGIN),
        GuardState::Pending | GuardState::Allowed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{GuardState, SessionGuard, redirect_target};
    use crate::{
        features::session::{context::GuardDecision, types::UserRecord},
        routes::paths,
    };

    #[test]
    fn guard_starts_pending_without_redirect() {
        let guard = SessionGuard::new();
        assert_eq!(guard.state(), GuardState::Pending);
        assert_eq!(redirect_target(guard.state()), None);
    }

    #[test]
    fn guard_resolves_exactly_once() {
        let mut guard = SessionGuard::new();

        assert_eq!(guard.resolve(&GuardDecision::Denied), Some(GuardState::Denied));
        assert_eq!(
            guard.resolve(&GuardDecision::Allowed(UserRecord::new("a@b.co"))),
            None
        );
        assert_eq!(guard.state(), GuardState::Denied);
    }

    #[test]
    fn only_denial_redirects_to_login() {
        let mut guard = SessionGuard::new();
        guard.resolve(&GuardDecision::Allowed(UserRecord::new("a@b.co")));
        assert_eq!(redirect_target(guard.state()), None);

        assert_eq!(redirect_target(GuardState::Denied), Some(paths::ADMIN_LOGIN));
    }
}
