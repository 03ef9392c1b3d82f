use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Human-readable message carried by the error, if it has one.
    ///
    /// Forms show this text verbatim and fall back to their own static string
    /// when it is absent.
    pub fn user_message(&self) -> Option<&str> {
        let message = match self {
            Self::Config(message)
            | Self::Network(message)
            | Self::Timeout(message)
            | Self::Parse(message)
            | Self::Serialization(message)
            | Self::Http { message, .. } => message.trim(),
        };

        (!message.is_empty()).then_some(message)
    }

    /// True when the API rejected the session itself.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_returns_payload_text() {
        let err = AppError::Http {
            status: 400,
            message: "Current password is incorrect".to_string(),
        };
        assert_eq!(err.user_message(), Some("Current password is incorrect"));
    }

    #[test]
    fn user_message_is_none_for_blank_payload() {
        let err = AppError::Http {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message(), None);
    }

    #[test]
    fn unauthenticated_covers_401_and_403_only() {
        let status = |status| AppError::Http {
            status,
            message: String::new(),
        };
        assert!(status(401).is_unauthenticated());
        assert!(status(403).is_unauthenticated());
        assert!(!status(500).is_unauthenticated());
        assert!(!AppError::Network("offline".to_string()).is_unauthenticated());
    }

    #[test]
    fn display_includes_status() {
        let err = AppError::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (502): Bad Gateway");
    }
}
