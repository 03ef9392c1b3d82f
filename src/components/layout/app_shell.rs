//! Page frame with the site header. The dashboard link only shows once the
//! session context holds a confirmed user; the API still enforces access.
//! Signing out lives on the profile panel.

use crate::features::session::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let current_user = session.current_user();

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href=paths::LANDING {..} class="flex items-center space-x-3">
                        <img src="/logo.svg" class="h-8" alt="GHS Carnival" />
                        <span class="font-semibold whitespace-nowrap">"GHS Carnival"</span>
                    </A>
                    <nav class="flex items-center gap-6 text-sm font-medium text-gray-700">
                        <A href=paths::HEALTH {..} class="hover:text-orange-600">
                            "Status"
                        </A>
                        <Show when=move || current_user.with(Option::is_some)>
                            <A href=paths::ADMIN_DASHBOARD {..} class="hover:text-orange-600">
                                "Dashboard"
                            </A>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-xl mx-auto px-4 py-8">{children()}</div>
            </main>
        </div>
    }
}
