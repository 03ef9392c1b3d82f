//! State machine behind the profile settings panel.
//!
//! Two forms (email, password) share one editor surface and one banner. Each
//! submission runs `validate -> submit -> {succeeded, failed}`: validation is
//! synchronous and never reaches the network, and while a request is in
//! flight further submissions are refused. Switching tabs clears the banner
//! but keeps whatever the admin typed in either form.

use crate::{
    app_lib::AppError,
    features::{
        profile::{
            types::{ProfileUpdate, UpdateProfileResponse},
            validation::{EmailChangeForm, PasswordChangeForm, ValidationError},
        },
        session::types::UserRecord,
    },
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long the success banner stays up before the editor collapses.
pub const EDITOR_COLLAPSE_DELAY: Duration = Duration::from_millis(2_000);

const EMAIL_UPDATED: &str = "Email updated successfully";
const PASSWORD_UPDATED: &str = "Password updated successfully";
const EMAIL_FAILED: &str = "Failed to update email";
const PASSWORD_FAILED: &str = "Failed to update password";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Email,
    Password,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Error(String),
    Success(String),
}

/// Result of pressing a form's submit button.
#[derive(Debug)]
pub enum Submission {
    /// Validation passed; send this update.
    Dispatch(ProfileUpdate),
    /// Validation failed; the banner shows the rule message.
    Rejected(ValidationError),
    /// A request is already in flight; nothing changed.
    Busy,
}

/// Result of feeding a finished request back into the workflow.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Succeeded { user: Option<UserRecord> },
    Failed,
    /// No request was in flight.
    Ignored,
}

impl Completion {
    /// Record that should replace the cached user, if the server returned one.
    pub fn cache_update(&self) -> Option<&UserRecord> {
        match self {
            Self::Succeeded { user } => user.as_ref(),
            Self::Failed | Self::Ignored => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileWorkflow {
    editing: bool,
    active_tab: ProfileTab,
    email_form: EmailChangeForm,
    password_form: PasswordChangeForm,
    banner: Option<Banner>,
    in_flight: Option<ProfileTab>,
    known_email: String,
}

impl ProfileWorkflow {
    /// Starts closed on the email tab, pre-filled with the known email.
    pub fn new(known_email: impl Into<String>) -> Self {
        let known_email = known_email.into();
        Self {
            editing: false,
            active_tab: ProfileTab::Email,
            email_form: EmailChangeForm::new(known_email.clone()),
            password_form: PasswordChangeForm::default(),
            banner: None,
            in_flight: None,
            known_email,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn active_tab(&self) -> ProfileTab {
        self.active_tab
    }

    pub fn email_form(&self) -> &EmailChangeForm {
        &self.email_form
    }

    pub fn password_form(&self) -> &PasswordChangeForm {
        &self.password_form
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn known_email(&self) -> &str {
        &self.known_email
    }

    pub fn open_editor(&mut self) {
        self.editing = true;
    }

    /// Closes the editor on explicit user request.
    pub fn cancel_editor(&mut self) {
        self.editing = false;
        self.banner = None;
    }

    /// Closes the editor once the success delay has elapsed.
    pub fn collapse_editor(&mut self) {
        self.editing = false;
        self.banner = None;
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
        self.banner = None;
    }

    pub fn set_email(&mut self, value: String) {
        self.email_form.email = value;
    }

    pub fn set_email_current_password(&mut self, value: String) {
        self.email_form.current_password = value;
    }

    pub fn set_new_password(&mut self, value: String) {
        self.password_form.new_password = value;
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.password_form.confirm_password = value;
    }

    pub fn set_password_current_password(&mut self, value: String) {
        self.password_form.current_password = value;
    }

    pub fn submit_email(&mut self) -> Submission {
        if self.in_flight.is_some() {
            return Submission::Busy;
        }
        self.banner = None;

        if let Err(err) = self.email_form.validate(&self.known_email) {
            return self.reject(err);
        }

        debug!("dispatching email change");
        self.in_flight = Some(ProfileTab::Email);
        Submission::Dispatch(ProfileUpdate::email(
            self.email_form.email.clone(),
            &self.email_form.current_password,
        ))
    }

    pub fn submit_password(&mut self) -> Submission {
        if self.in_flight.is_some() {
            return Submission::Busy;
        }
        self.banner = None;

        if let Err(err) = self.password_form.validate() {
            return self.reject(err);
        }

        debug!("dispatching password change");
        self.in_flight = Some(ProfileTab::Password);
        Submission::Dispatch(ProfileUpdate::password(
            &self.password_form.new_password,
            &self.password_form.current_password,
        ))
    }

    /// Applies the result of the in-flight request.
    pub fn complete(&mut self, result: Result<UpdateProfileResponse, AppError>) -> Completion {
        let Some(tab) = self.in_flight.take() else {
            return Completion::Ignored;
        };

        match result {
            Ok(response) => {
                let user = response.user;
                match tab {
                    ProfileTab::Email => {
                        // The server's copy wins over what was typed.
                        let confirmed = user
                            .as_ref()
                            .map(|u| u.email.clone())
                            .unwrap_or_default();
                        self.email_form = EmailChangeForm::new(confirmed);
                        self.banner = Some(Banner::Success(EMAIL_UPDATED.to_string()));
                    }
                    ProfileTab::Password => {
                        self.password_form = PasswordChangeForm::default();
                        self.banner = Some(Banner::Success(PASSWORD_UPDATED.to_string()));
                    }
                }
                if let Some(user) = &user {
                    self.known_email.clone_from(&user.email);
                }
                info!(?tab, "profile updated");
                Completion::Succeeded { user }
            }
            Err(err) => {
                let fallback = match tab {
                    ProfileTab::Email => EMAIL_FAILED,
                    ProfileTab::Password => PASSWORD_FAILED,
                };
                warn!(?tab, error = %err, "profile update failed");
                let message = err.user_message().unwrap_or(fallback).to_string();
                self.banner = Some(Banner::Error(message));
                Completion::Failed
            }
        }
    }

    fn reject(&mut self, err: ValidationError) -> Submission {
        self.banner = Some(Banner::Error(err.to_string()));
        Submission::Rejected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{Banner, Completion, ProfileTab, ProfileWorkflow, Submission};
    use crate::{
        app_lib::AppError,
        features::{
            profile::{
                client::ProfileApi,
                types::{ProfileUpdate, UpdateProfileResponse},
                validation::ValidationError,
            },
            session::{
                cache::{MemoryUserCache, UserCache},
                context::SessionContext,
                types::UserRecord,
            },
        },
    };
    use secrecy::ExposeSecret;
    use serde_json::json;
    use std::cell::RefCell;

    const KNOWN: &str = "admin@ghs.in";

    /// Records every update it receives and answers with a fixed result.
    struct RecordingApi {
        response: Result<UpdateProfileResponse, AppError>,
        requests: RefCell<Vec<ProfileUpdate>>,
    }

    impl RecordingApi {
        fn answering(response: Result<UpdateProfileResponse, AppError>) -> Self {
            Self {
                response,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl ProfileApi for RecordingApi {
        async fn update_profile(
            &self,
            update: &ProfileUpdate,
        ) -> Result<UpdateProfileResponse, AppError> {
            self.requests.borrow_mut().push(update.clone());
            self.response.clone()
        }
    }

    /// Sends a submission the way the panel does: only dispatches reach the API.
    async fn send(
        workflow: &mut ProfileWorkflow,
        submission: Submission,
        api: &RecordingApi,
    ) -> Option<Completion> {
        match submission {
            Submission::Dispatch(update) => {
                let result = api.update_profile(&update).await;
                Some(workflow.complete(result))
            }
            Submission::Rejected(_) | Submission::Busy => None,
        }
    }

    fn responding_with(user: Option<UserRecord>) -> Result<UpdateProfileResponse, AppError> {
        Ok(UpdateProfileResponse { user })
    }

    fn error_banner(workflow: &ProfileWorkflow) -> Option<&str> {
        match workflow.banner() {
            Some(Banner::Error(message)) => Some(message),
            _ => None,
        }
    }

    fn fill_password_form(workflow: &mut ProfileWorkflow, new: &str, confirm: &str, current: &str) {
        workflow.set_new_password(new.to_string());
        workflow.set_confirm_password(confirm.to_string());
        workflow.set_password_current_password(current.to_string());
    }

    #[tokio::test]
    async fn email_validation_failures_never_reach_the_api() {
        let api = RecordingApi::answering(responding_with(None));
        let mut workflow = ProfileWorkflow::new(KNOWN);

        let submission = workflow.submit_email();
        assert!(matches!(
            submission,
            Submission::Rejected(ValidationError::MissingCurrentPassword)
        ));
        send(&mut workflow, submission, &api).await;
        assert_eq!(error_banner(&workflow), Some("Please enter your current password"));

        workflow.set_email_current_password("secret".to_string());
        let submission = workflow.submit_email();
        assert!(matches!(
            submission,
            Submission::Rejected(ValidationError::UnchangedEmail)
        ));
        send(&mut workflow, submission, &api).await;
        assert_eq!(error_banner(&workflow), Some("Please enter a different email"));

        assert_eq!(api.calls(), 0);
        assert!(!workflow.is_submitting());
    }

    #[test]
    fn password_validation_reports_current_password_before_new_password() {
        let mut workflow = ProfileWorkflow::new(KNOWN);

        let submission = workflow.submit_password();

        assert!(matches!(
            submission,
            Submission::Rejected(ValidationError::MissingCurrentPassword)
        ));
        assert_eq!(error_banner(&workflow), Some("Please enter your current password"));
    }

    #[tokio::test]
    async fn password_length_boundary_gates_the_network_call() {
        let api = RecordingApi::answering(responding_with(None));
        let mut workflow = ProfileWorkflow::new(KNOWN);

        fill_password_form(&mut workflow, "1234567", "1234567", "secret");
        let submission = workflow.submit_password();
        send(&mut workflow, submission, &api).await;
        assert_eq!(
            error_banner(&workflow),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(api.calls(), 0);

        fill_password_form(&mut workflow, "12345678", "12345678", "secret");
        let submission = workflow.submit_password();
        send(&mut workflow, submission, &api).await;
        assert_eq!(api.calls(), 1);

        let requests = api.requests.borrow();
        let sent = &requests[0];
        assert_eq!(sent.new_email, None);
        assert_eq!(
            sent.new_password.as_ref().map(|p| p.expose_secret().to_string()),
            Some("12345678".to_string())
        );
        assert_eq!(sent.current_password.expose_secret(), "secret");
    }

    #[test]
    fn tab_switch_keeps_fields_and_clears_banner() {
        let mut workflow = ProfileWorkflow::new(KNOWN);
        workflow.open_editor();
        workflow.set_email("typed@ghs.in".to_string());
        workflow.set_email_current_password("secret".to_string());
        workflow.select_tab(ProfileTab::Password);
        fill_password_form(&mut workflow, "abc", "abd", "");

        let _ = workflow.submit_password();
        assert!(workflow.banner().is_some());

        workflow.select_tab(ProfileTab::Email);
        assert_eq!(workflow.banner(), None);
        workflow.select_tab(ProfileTab::Password);

        assert_eq!(workflow.active_tab(), ProfileTab::Password);
        assert_eq!(workflow.email_form().email, "typed@ghs.in");
        assert_eq!(workflow.email_form().current_password, "secret");
        assert_eq!(workflow.password_form().new_password, "abc");
        assert_eq!(workflow.password_form().confirm_password, "abd");
        assert!(workflow.is_editing());
    }

    #[tokio::test]
    async fn email_success_replaces_cache_and_reads_email_from_response() {
        let confirmed = UserRecord::new("new@x.com").with_attribute("id", json!(9));
        let api = RecordingApi::answering(responding_with(Some(confirmed.clone())));
        let mut session = SessionContext::new(MemoryUserCache::with_raw(
            r#"{"email":"admin@ghs.in","phone":"98100"}"#,
        ));
        let mut workflow = ProfileWorkflow::new(session.known_email());
        workflow.open_editor();
        // Typed with different casing; the server normalizes it.
        workflow.set_email("NEW@x.com".to_string());
        workflow.set_email_current_password("secret".to_string());

        let submission = workflow.submit_email();
        let completion = send(&mut workflow, submission, &api).await.unwrap();
        if let Some(user) = completion.cache_update() {
            session.replace_user(user.clone());
        }

        assert_eq!(session.current_user(), Some(&confirmed));
        assert_eq!(session.cache().load(), Some(confirmed));
        assert_eq!(workflow.email_form().email, "new@x.com");
        assert_eq!(workflow.email_form().current_password, "");
        assert_eq!(workflow.known_email(), "new@x.com");
        assert_eq!(
            workflow.banner(),
            Some(&Banner::Success("Email updated successfully".to_string()))
        );
    }

    #[test]
    fn email_success_without_user_clears_email_field() {
        let mut workflow = ProfileWorkflow::new(KNOWN);
        workflow.set_email("new@x.com".to_string());
        workflow.set_email_current_password("secret".to_string());
        let _ = workflow.submit_email();

        let completion = workflow.complete(responding_with(None));

        assert_eq!(completion, Completion::Succeeded { user: None });
        assert_eq!(completion.cache_update(), None);
        assert_eq!(workflow.email_form().email, "");
        assert_eq!(workflow.known_email(), KNOWN);
    }

    #[test]
    fn password_success_clears_every_password_field() {
        let mut workflow = ProfileWorkflow::new(KNOWN);
        fill_password_form(&mut workflow, "12345678", "12345678", "secret");
        let _ = workflow.submit_password();

        let completion = workflow.complete(responding_with(Some(UserRecord::new(KNOWN))));

        assert_eq!(workflow.password_form(), &Default::default());
        assert_eq!(completion.cache_update().map(|u| u.email.as_str()), Some(KNOWN));
        assert_eq!(
            workflow.banner(),
            Some(&Banner::Success("Password updated successfully".to_string()))
        );
    }

    #[tokio::test]
    async fn second_submission_is_not_dispatched_while_first_is_pending() {
        let api = RecordingApi::answering(responding_with(None));
        let mut workflow = ProfileWorkflow::new(KNOWN);
        fill_password_form(&mut workflow, "12345678", "12345678", "secret");

        let first = workflow.submit_password();
        let second = workflow.submit_password();
        assert!(matches!(first, Submission::Dispatch(_)));
        assert!(matches!(second, Submission::Busy));
        assert!(matches!(workflow.submit_email(), Submission::Busy));
        assert!(workflow.is_submitting());

        send(&mut workflow, second, &api).await;
        assert_eq!(api.calls(), 0);
        send(&mut workflow, first, &api).await;
        assert_eq!(api.calls(), 1);
        assert!(!workflow.is_submitting());

        fill_password_form(&mut workflow, "abcdefgh", "abcdefgh", "12345678");
        assert!(matches!(workflow.submit_password(), Submission::Dispatch(_)));
    }

    #[test]
    fn failure_shows_payload_message_and_keeps_input() {
        let mut workflow = ProfileWorkflow::new(KNOWN);
        workflow.set_email("new@x.com".to_string());
        workflow.set_email_current_password("wrong".to_string());
        let _ = workflow.submit_email();

        let completion = workflow.complete(Err(AppError::Http {
            status: 401,
            message: "Current password is incorrect".to_string(),
        }));

        assert_eq!(completion, Completion::Failed);
        assert_eq!(error_banner(&workflow), Some("Current password is incorrect"));
        assert_eq!(workflow.email_form().email, "new@x.com");
        assert_eq!(workflow.email_form().current_password, "wrong");
    }

    #[test]
    fn failure_without_message_uses_form_fallback() {
        let mut workflow = ProfileWorkflow::new(KNOWN);
        fill_password_form(&mut workflow, "12345678", "12345678", "secret");
        let _ = workflow.submit_password();

        workflow.complete(Err(AppError::Http {
            status: 500,
            message: String::new(),
        }));

        assert_eq!(error_banner(&workflow), Some("Failed to update password"));
    }

    #[test]
    fn completion_without_request_is_ignored() {
        let mut workflow = ProfileWorkflow::new(KNOWN);
        assert_eq!(workflow.complete(responding_with(None)), Completion::Ignored);
        assert_eq!(workflow.banner(), None);
    }

    #[test]
    fn cancel_and_collapse_close_editor_and_clear_banner() {
        let mut workflow = ProfileWorkflow::new(KNOWN);
        workflow.open_editor();
        let _ = workflow.submit_email();
        assert!(workflow.banner().is_some());

        workflow.cancel_editor();
        assert!(!workflow.is_editing());
        assert_eq!(workflow.banner(), None);

        workflow.open_editor();
        workflow.set_email("new@x.com".to_string());
        workflow.set_email_current_password("secret".to_string());
        let _ = workflow.submit_email();
        workflow.complete(responding_with(Some(UserRecord::new("new@x.com"))));
        workflow.collapse_editor();
        assert!(!workflow.is_editing());
        assert_eq!(workflow.banner(), None);
    }
}
