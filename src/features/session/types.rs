//! Types for the admin identity endpoints.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// The authenticated admin as reported by the API.
///
/// `email` is required and must be non-blank; every other field is kept
/// verbatim in `attributes` so the record round-trips through the cache
/// without losing data the UI does not model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawUserRecord")]
pub struct UserRecord {
    pub email: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[cfg(test)]
impl UserRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[derive(Deserialize)]
struct RawUserRecord {
    email: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl TryFrom<RawUserRecord> for UserRecord {
    type Error = String;

    fn try_from(raw: RawUserRecord) -> Result<Self, Self::Error> {
        let email = raw.email.trim();
        if email.is_empty() {
            return Err("user record has a blank email".to_string());
        }

        Ok(Self {
            email: email.to_string(),
            attributes: raw.attributes,
        })
    }
}

/// Credentials submitted by the admin login form.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password),
        }
    }
}

impl Clone for LoginRequest {
    fn clone(&self) -> Self {
        Self::new(self.email.clone(), self.password.expose_secret())
    }
}

fn expose_password<S: Serializer>(
    password: &SecretString,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

/// Response envelope for login and profile updates.
#[derive(Clone, Debug, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: Option<UserRecord>,
}

#[cfg(test)]
mod tests {
    use super::{LoginRequest, UserEnvelope, UserRecord};
    use serde_json::json;

    #[test]
    fn login_request_sends_password_but_never_prints_it() {
        let request = LoginRequest::new("captain@ghs.in", "hunter22");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "email": "captain@ghs.in", "password": "hunter22" })
        );
        assert!(!format!("{request:?}").contains("hunter22"));
        assert!(!format!("{:?}", request.clone()).contains("hunter22"));
    }

    #[test]
    fn deserialize_keeps_unknown_fields_as_attributes() {
        let record: UserRecord = serde_json::from_value(json!({
            "id": 7,
            "email": "captain@ghs.in",
            "role": "ADMIN"
        }))
        .unwrap();

        assert_eq!(record.email, "captain@ghs.in");
        assert_eq!(record.attribute("id"), Some(&json!(7)));
        assert_eq!(record.attribute("role"), Some(&json!("ADMIN")));
        assert!(record.attribute("email").is_none());
    }

    #[test]
    fn deserialize_rejects_missing_or_blank_email() {
        assert!(serde_json::from_value::<UserRecord>(json!({ "id": 1 })).is_err());
        assert!(serde_json::from_value::<UserRecord>(json!({ "email": "  " })).is_err());
        assert!(serde_json::from_value::<UserRecord>(json!({ "email": null })).is_err());
    }

    #[test]
    fn serialize_flattens_attributes_next_to_email() {
        let record = UserRecord::new("captain@ghs.in").with_attribute("id", json!(7));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "email": "captain@ghs.in", "id": 7 })
        );
    }

    #[test]
    fn envelope_user_is_optional() {
        let envelope: UserEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.user.is_none());

        let envelope: UserEnvelope =
            serde_json::from_value(json!({ "user": { "email": "new@x.com" } })).unwrap();
        assert_eq!(envelope.user.map(|user| user.email).as_deref(), Some("new@x.com"));
    }
}
