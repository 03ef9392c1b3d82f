//! Fallback page for unknown routes.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <div class="relative">
                    <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>
                <div class="mt-6 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=paths::LANDING
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-orange-600 rounded-lg hover:bg-orange-700"
                    >
                        "Go Home"
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100"
                        on:click=move |_| {
                            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                                let _ = history.back();
                            }
                        }
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
