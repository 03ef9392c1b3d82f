//! Types for the `/health` response.

use serde::Deserialize;

/// Health document returned by the API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthLevel {
    Ok,
    Degraded,
    Error,
}

impl HealthStatus {
    /// Unknown status strings are reported as errors.
    pub fn level(&self) -> HealthLevel {
        match self.status.trim().to_ascii_lowercase().as_str() {
            "ok" => HealthLevel::Ok,
            "degraded" => HealthLevel::Degraded,
            _ => HealthLevel::Error,
        }
    }

    /// One-line summary for the status badge.
    pub fn summary(&self) -> String {
        let database = self.database.as_deref().unwrap_or("unknown");
        match self.message.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(message) => format!("{} (database: {database}): {message}", self.status),
            None => format!("{} (database: {database})", self.status),
        }
    }
}
