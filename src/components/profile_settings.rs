//! Profile panel on the admin dashboard.
//!
//! The view is a thin shell over [`ProfileWorkflow`]: every input and button
//! forwards to the workflow, and the banner, tab, and loading state are read
//! back from it. The request itself runs in a local action so the in-flight
//! flag can block a second submission from either form.

use crate::components::{Alert, AlertKind, Button, ButtonVariant, SignOutButton};
use crate::features::profile::{
    client::{HttpProfileApi, ProfileApi},
    types::ProfileUpdate,
    workflow::{Banner, Completion, EDITOR_COLLAPSE_DELAY, ProfileTab, ProfileWorkflow, Submission},
};
use crate::features::session::state::use_session;
use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, prelude::*};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-orange-500 focus:border-orange-500 block w-full p-2.5";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900";

#[component]
pub fn ProfileSettings() -> impl IntoView {
    let session = use_session();
    let workflow = RwSignal::new(ProfileWorkflow::new(session.known_email_untracked()));

    let update_action = Action::new_local(move |update: &ProfileUpdate| {
        let update = update.clone();
        async move { HttpProfileApi.update_profile(&update).await }
    });

    Effect::new(move |_| {
        let Some(result) = update_action.value().get() else {
            return;
        };
        let Some(completion) = workflow.try_update(|flow| flow.complete(result)) else {
            return;
        };
        if let Some(user) = completion.cache_update() {
            session.replace_user(user.clone());
        }
        if matches!(completion, Completion::Succeeded { .. }) {
            let delay = u32::try_from(EDITOR_COLLAPSE_DELAY.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(delay, move || {
                let _ = workflow.try_update(ProfileWorkflow::collapse_editor);
            })
            .forget();
        }
    });

    let dispatch = move |submission: Submission| {
        if let Submission::Dispatch(update) = submission {
            update_action.dispatch(update);
        }
    };

    let on_email_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(submission) = workflow.try_update(ProfileWorkflow::submit_email) {
            dispatch(submission);
        }
    };

    let on_password_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(submission) = workflow.try_update(ProfileWorkflow::submit_password) {
            dispatch(submission);
        }
    };

    let submitting = Signal::derive(move || workflow.with(ProfileWorkflow::is_submitting));
    let editing = move || workflow.with(ProfileWorkflow::is_editing);
    let active_tab = move || workflow.with(ProfileWorkflow::active_tab);
    let known_email = move || workflow.with(|flow| flow.known_email().to_string());

    let tab_class = move |tab: ProfileTab| {
        if active_tab() == tab {
            "px-4 py-2 text-sm font-medium border-b-2 border-orange-600 text-orange-600"
        } else {
            "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-700"
        }
    };

    let email_form = move || {
        view! {
            <form class="space-y-4" on:submit=on_email_submit>
                <div>
                    <label class=LABEL_CLASS for="profile-email">"New email"</label>
                    <input
                        id="profile-email"
                        type="email"
                        class=INPUT_CLASS
                        autocomplete="email"
                        prop:value=move || workflow.with(|flow| flow.email_form().email.clone())
                        on:input=move |event| {
                            workflow.update(|flow| flow.set_email(event_target_value(&event)));
                        }
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS for="profile-email-current">"Current password"</label>
                    <input
                        id="profile-email-current"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="current-password"
                        prop:value=move || {
                            workflow.with(|flow| flow.email_form().current_password.clone())
                        }
                        on:input=move |event| {
                            workflow
                                .update(|flow| {
                                    flow.set_email_current_password(event_target_value(&event));
                                });
                        }
                    />
                </div>
                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Updating..." } else { "Update Email" }}
                </Button>
            </form>
        }
    };

    let password_form = move || {
        view! {
            <form class="space-y-4" on:submit=on_password_submit>
                <div>
                    <label class=LABEL_CLASS for="profile-new-password">"New password"</label>
                    <input
                        id="profile-new-password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        prop:value=move || {
                            workflow.with(|flow| flow.password_form().new_password.clone())
                        }
                        on:input=move |event| {
                            workflow.update(|flow| flow.set_new_password(event_target_value(&event)));
                        }
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS for="profile-confirm-password">
                        "Confirm new password"
                    </label>
                    <input
                        id="profile-confirm-password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        prop:value=move || {
                            workflow.with(|flow| flow.password_form().confirm_password.clone())
                        }
                        on:input=move |event| {
                            workflow
                                .update(|flow| {
                                    flow.set_confirm_password(event_target_value(&event));
                                });
                        }
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS for="profile-password-current">
                        "Current password"
                    </label>
                    <input
                        id="profile-password-current"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="current-password"
                        prop:value=move || {
                            workflow.with(|flow| flow.password_form().current_password.clone())
                        }
                        on:input=move |event| {
                            workflow
                                .update(|flow| {
                                    flow.set_password_current_password(event_target_value(&event));
                                });
                        }
                    />
                </div>
                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Updating..." } else { "Update Password" }}
                </Button>
            </form>
        }
    };

    let banner = move || {
        workflow
            .with(|flow| flow.banner().cloned())
            .map(|banner| {
                let (kind, message) = match banner {
                    Banner::Error(message) => (AlertKind::Error, message),
                    Banner::Success(message) => (AlertKind::Success, message),
                };
                view! {
                    <div class="mb-4">
                        <Alert kind=kind message=message />
                    </div>
                }
            })
    };

    view! {
        <section class="rounded-lg border border-gray-200 bg-white p-6 shadow-sm">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-lg font-semibold text-gray-900">"Profile Settings"</h2>
                    <p class="text-sm text-gray-500">
                        "Signed in as " <span class="font-medium">{known_email}</span>
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    <Show when=move || !editing()>
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=Callback::new(move |()| {
                                workflow.update(ProfileWorkflow::open_editor);
                            })
                        >
                            "Edit Profile"
                        </Button>
                    </Show>
                    <SignOutButton />
                </div>
            </div>
            <Show when=editing>
                <div class="mt-6">
                    <div class="mb-4 flex border-b border-gray-200" role="tablist">
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(ProfileTab::Email)
                            on:click=move |_| workflow.update(|flow| flow.select_tab(ProfileTab::Email))
                        >
                            "Change Email"
                        </button>
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(ProfileTab::Password)
                            on:click=move |_| {
                                workflow.update(|flow| flow.select_tab(ProfileTab::Password));
                            }
                        >
                            "Change Password"
                        </button>
                    </div>
                    {banner}
                    {move || match active_tab() {
                        ProfileTab::Email => email_form().into_any(),
                        ProfileTab::Password => password_form().into_any(),
                    }}
                    <div class="mt-4">
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=Callback::new(move |()| {
                                workflow.update(ProfileWorkflow::cancel_editor);
                            })
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
