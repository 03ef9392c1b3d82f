//! Local validation for the profile forms. Rules run in a fixed order and the
//! first violation is reported; nothing here touches the network.

use regex::Regex;
use thiserror::Error;

/// Minimum length of a new password, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your current password")]
    MissingCurrentPassword,
    #[error("Please enter a different email")]
    UnchangedEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a new password")]
    MissingNewPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailChangeForm {
    pub email: String,
    pub current_password: String,
}

impl EmailChangeForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            current_password: String::new(),
        }
    }

    /// Checks the form against the email the admin currently has.
    pub fn validate(&self, known_email: &str) -> Result<(), ValidationError> {
        if self.current_password.is_empty() {
            return Err(ValidationError::MissingCurrentPassword);
        }
        if self.email == known_email {
            return Err(ValidationError::UnchangedEmail);
        }
        if !valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub new_password: String,
    pub confirm_password: String,
    pub current_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.current_password.is_empty() {
            return Err(ValidationError::MissingCurrentPassword);
        }
        if self.new_password.is_empty() {
            return Err(ValidationError::MissingNewPassword);
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Same shape check the browser applies to `type="email"` inputs.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::{EmailChangeForm, PasswordChangeForm, ValidationError, valid_email};

    fn password_form(new: &str, confirm: &str, current: &str) -> PasswordChangeForm {
        PasswordChangeForm {
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
            current_password: current.to_string(),
        }
    }

    #[test]
    fn email_form_requires_current_password_first() {
        let form = EmailChangeForm::new("admin@ghs.in");
        assert_eq!(
            form.validate("admin@ghs.in"),
            Err(ValidationError::MissingCurrentPassword)
        );
    }

    #[test]
    fn email_form_rejects_unchanged_email() {
        let form = EmailChangeForm {
            email: "admin@ghs.in".to_string(),
            current_password: "secret".to_string(),
        };
        assert_eq!(
            form.validate("admin@ghs.in"),
            Err(ValidationError::UnchangedEmail)
        );
    }

    #[test]
    fn email_form_rejects_malformed_email_after_other_rules() {
        let form = EmailChangeForm {
            email: "not-an-email".to_string(),
            current_password: "secret".to_string(),
        };
        assert_eq!(form.validate("admin@ghs.in"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_form_accepts_new_address() {
        let form = EmailChangeForm {
            email: "captain@ghs.in".to_string(),
            current_password: "secret".to_string(),
        };
        assert_eq!(form.validate("admin@ghs.in"), Ok(()));
    }

    #[test]
    fn password_form_reports_first_failure_only() {
        assert_eq!(
            password_form("", "", "").validate(),
            Err(ValidationError::MissingCurrentPassword)
        );
        assert_eq!(
            password_form("", "", "secret").validate(),
            Err(ValidationError::MissingNewPassword)
        );
        assert_eq!(
            password_form("short", "other", "secret").validate(),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn password_length_boundary_is_eight_characters() {
        assert_eq!(
            password_form("1234567", "1234567", "secret").validate(),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(password_form("12345678", "12345678", "secret").validate(), Ok(()));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert_eq!(
            password_form("ééééééé", "ééééééé", "secret").validate(),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(
            ValidationError::MissingCurrentPassword.to_string(),
            "Please enter your current password"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn valid_email_checks_shape() {
        assert!(valid_email("captain@ghs.in"));
        assert!(!valid_email("captain@ghs"));
        assert!(!valid_email("cap tain@ghs.in"));
        assert!(!valid_email(""));
    }
}
