//! Public status page: build version plus the API's own health report.

use crate::app_lib::GIT_COMMIT_HASH;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::health::{client::fetch_health, types::HealthLevel};
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let health = LocalResource::new(fetch_health);

    view! {
        <AppShell>
            <div class="mx-auto max-w-[38rem] space-y-6">
                <div class="rounded-lg border border-gray-200 bg-white">
                    <div class="border-b border-gray-200 px-6 py-3 font-semibold text-gray-600">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center">{GIT_COMMIT_HASH}</pre>
                    </div>
                </div>
                <div class="rounded-lg border border-gray-200 bg-white">
                    <div class="border-b border-gray-200 px-6 py-3 font-semibold text-gray-600">
                        "API"
                    </div>
                    <div class="p-6">
                        {move || match health.get() {
                            None => view! { <Spinner /> }.into_any(),
                            Some(Ok(status)) => {
                                let kind = match status.level() {
                                    HealthLevel::Ok => AlertKind::Success,
                                    HealthLevel::Degraded => AlertKind::Info,
                                    HealthLevel::Error => AlertKind::Error,
                                };
                                view! { <Alert kind=kind message=status.summary() /> }.into_any()
                            }
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
