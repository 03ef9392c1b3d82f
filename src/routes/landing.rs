use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-4xl font-black text-gray-900">"GHS Carnival"</h1>
                <p class="mt-4 max-w-md text-gray-500">
                    "Event details, stalls, and schedules are published here as they are announced."
                </p>
                <A
                    href=paths::HEALTH
                    {..}
                    class="mt-6 text-sm font-medium text-orange-600 hover:underline"
                >
                    "Service status"
                </A>
            </div>
        </AppShell>
    }
}
