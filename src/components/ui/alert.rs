//! Inline banners for the profile panel, the login form, and the health page.
//! Messages come from local validation or the API's error body and must never
//! carry a password.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            }
            Self::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
            }
            Self::Info => {
                "rounded-lg border border-amber-200 bg-amber-50 px-4 py-3 text-sm text-amber-800"
            }
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let role = if kind == AlertKind::Error { "alert" } else { "status" };

    view! { <div class=kind.class() role=role>{message}</div> }
}
