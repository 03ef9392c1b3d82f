#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod health;
#[cfg(target_arch = "wasm32")]
mod landing;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
pub(crate) use dashboard::DashboardPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use health::HealthPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use landing::LandingPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use login::LoginPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use not_found::NotFoundPage;

#[cfg(target_arch = "wasm32")]
pub(crate) use app_routes::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod app_routes {
    use super::{DashboardPage, HealthPage, LandingPage, LoginPage, NotFoundPage};
    use crate::components::ProtectedRoute;
    use leptos::prelude::*;
    use leptos_router::components::{Route, Routes};
    use leptos_router::path;

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/health") view=HealthPage />
                <Route path=path!("/ghs-control-panel-2026/login") view=LoginPage />
                <Route
                    path=path!("/ghs-control-panel-2026")
                    view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
                />
            </Routes>
        }
    }
}
