//! Sign-out control for the profile panel.

use crate::features::session::{client, state::use_session};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, hooks::use_navigate};
use tracing::{info, warn};

/// Ends the server session, forgets the local one, and returns to login.
/// The logout response does not change the outcome.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_click = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(err) = client::logout().await {
                warn!(error = %err, "logout request failed");
            }
            session.invalidate();
            info!("admin signed out");
            navigate(
                paths::ADMIN_LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    };

    view! {
        <button
            type="button"
            class="text-sm font-medium text-gray-700 hover:text-orange-600"
            on:click=on_click
        >
            "Sign Out"
        </button>
    }
}
