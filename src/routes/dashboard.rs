use crate::components::{AppShell, ProfileSettings};
use crate::features::session::state::use_session;
use leptos::prelude::*;

/// Admin landing page. Only rendered behind `ProtectedRoute`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let current_user = use_session().current_user();
    let greeting = move || {
        current_user.with(|user| {
            user.as_ref()
                .map_or_else(|| "Welcome".to_string(), |user| format!("Welcome, {}", user.email))
        })
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-2xl space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{greeting}</h1>
                <ProfileSettings />
            </div>
        </AppShell>
    }
}
