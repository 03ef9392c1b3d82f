//! Request and response types for the admin profile endpoint.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer, ser::SerializeStruct};

pub use crate::features::session::types::UserEnvelope as UpdateProfileResponse;

/// One re-authenticated profile change.
///
/// Exactly one of `new_email` / `new_password` is set; `current_password` is
/// always present. Password material stays wrapped until serialization.
#[derive(Debug)]
pub struct ProfileUpdate {
    pub new_email: Option<String>,
    pub new_password: Option<SecretString>,
    pub current_password: SecretString,
}

impl ProfileUpdate {
    pub fn email(new_email: String, current_password: &str) -> Self {
        Self {
            new_email: Some(new_email),
            new_password: None,
            current_password: SecretString::from(current_password),
        }
    }

    pub fn password(new_password: &str, current_password: &str) -> Self {
        Self {
            new_email: None,
            new_password: Some(SecretString::from(new_password)),
            current_password: SecretString::from(current_password),
        }
    }
}

impl Clone for ProfileUpdate {
    fn clone(&self) -> Self {
        Self {
            new_email: self.new_email.clone(),
            new_password: self
                .new_password
                .as_ref()
                .map(|secret| SecretString::from(secret.expose_secret())),
            current_password: SecretString::from(self.current_password.expose_secret()),
        }
    }
}

impl Serialize for ProfileUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = 1
            + usize::from(self.new_email.is_some())
            + usize::from(self.new_password.is_some());
        let mut state = serializer.serialize_struct("ProfileUpdate", fields)?;
        if let Some(email) = &self.new_email {
            state.serialize_field("new_email", email)?;
        }
        if let Some(password) = &self.new_password {
            state.serialize_field("new_password", password.expose_secret())?;
        }
        state.serialize_field("current_password", self.current_password.expose_secret())?;
        state.end()
    }
}
