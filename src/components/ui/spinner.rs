use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading");

    view! {
        <div class="flex items-center justify-center gap-3 py-6 text-sm text-gray-500">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-orange-200 border-t-orange-600"
                role="status"
                aria-live="polite"
                aria-label=label
            ></div>
            <span>{label}"..."</span>
        </div>
    }
}
