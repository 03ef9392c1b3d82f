//! Leptos wiring for the session context. The provider creates one context
//! per application and shares it through Leptos context; it does not run any
//! identity check itself, that is left to each guard.

use crate::features::session::{
    cache::LocalStorageCache,
    client::IdentityApi,
    context::{GuardDecision, SessionContext},
    types::UserRecord,
};
use crate::app_lib::AppError;
use leptos::prelude::*;

pub type BrowserSession = SessionContext<LocalStorageCache>;

#[derive(Clone, Copy)]
/// Reactive handle to the shared session context.
pub struct SessionHandle {
    context: RwSignal<BrowserSession>,
}

impl SessionHandle {
    fn new() -> Self {
        Self {
            context: RwSignal::new(SessionContext::new(LocalStorageCache)),
        }
    }

    /// Email for form pre-fill, read without tracking.
    pub fn known_email_untracked(&self) -> String {
        self.context.with_untracked(BrowserSession::known_email)
    }

    /// Reactive view of the confirmed user.
    pub fn current_user(&self) -> Signal<Option<UserRecord>> {
        let context = self.context;
        Signal::derive(move || context.with(|session| session.current_user().cloned()))
    }

    /// Runs one identity check and applies it, like [`SessionContext::refresh`].
    /// The signal is not borrowed while the request is in flight.
    pub async fn refresh<A: IdentityApi>(&self, api: &A) -> GuardDecision {
        let result = api.check().await;
        self.apply_check(result)
    }

    pub fn apply_check(&self, result: Result<UserRecord, AppError>) -> GuardDecision {
        self.context
            .try_update(|session| session.apply_check(result))
            .unwrap_or(GuardDecision::Denied)
    }

    pub fn invalidate(&self) {
        self.context.update(BrowserSession::invalidate);
    }

    pub fn replace_user(&self, user: UserRecord) {
        self.context.update(|session| session.replace_user(user));
    }
}

/// Provides the session context to the component tree.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionHandle::new());

    view! { {children()} }
}

/// Returns the shared session handle or a fresh one outside the provider.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(SessionHandle::new)
}
