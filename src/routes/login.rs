//! Admin sign-in. On success the returned user becomes the confirmed session
//! user and replaces the cached record before navigating to the dashboard.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::session::{client, state::use_session, types::LoginRequest};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};
use tracing::{info, warn};

const LOGIN_FAILED: &str = "Login failed";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        let Some(result) = login_action.value().get() else {
            return;
        };
        match result {
            Ok(envelope) => {
                if let Some(user) = envelope.user {
                    session.replace_user(user);
                }
                info!("admin signed in");
                navigate(
                    paths::ADMIN_DASHBOARD,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                set_error.set(Some(login_message(&err)));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginRequest::new(email_value, &password_value));
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-bold text-gray-900">"Admin Sign In"</h1>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-orange-500 focus:border-orange-500 block w-full p-2.5"
                        autocomplete="email"
                        placeholder=session.known_email_untracked()
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-orange-500 focus:border-orange-500 block w-full p-2.5"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <Spinner label="Signing in" /> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}

fn login_message(err: &AppError) -> String {
    err.user_message().unwrap_or(LOGIN_FAILED).to_string()
}
