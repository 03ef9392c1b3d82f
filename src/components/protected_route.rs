//! Gate for admin pages.
//!
//! Each mount runs exactly one identity check. While it is pending a loading
//! indicator is shown; on success the children render; on any failure the
//! cached user is evicted and the browser is sent to the login page, replacing
//! the current history entry. The check is UX only: the API authorizes every
//! request on its own.

use crate::components::Spinner;
use crate::features::session::{
    client::HttpIdentityApi,
    guard::{GuardState, SessionGuard, redirect_target},
    state::use_session,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, hooks::use_navigate};
use tracing::debug;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let guard = RwSignal::new(SessionGuard::new());

    spawn_local(async move {
        let decision = session.refresh(&HttpIdentityApi).await;
        // The page may have unmounted while the check was in flight.
        if let Some(Some(state)) = guard.try_update(|guard| guard.resolve(&decision)) {
            debug!(?state, "session guard resolved");
        }
    });

    let state = Memo::new(move |_| guard.with(SessionGuard::state));

    Effect::new(move |_| {
        if let Some(target) = redirect_target(state.get()) {
            debug!(target, "session denied, redirecting");
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match state.get() {
        GuardState::Pending => view! { <Spinner label="Checking session" /> }.into_any(),
        GuardState::Allowed => children().into_any(),
        GuardState::Denied => ().into_any(),
    }
}
