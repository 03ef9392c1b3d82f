//! HTTP helpers for the carnival JSON API with a fixed timeout and consistent
//! error mapping. Feature clients use these helpers so request setup and error
//! bodies are handled in one place. Admin endpoints rely on the session cookie,
//! so every admin helper sends credentials; the helpers never store tokens.

use super::errors::AppError;
use serde_json::Value;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::{AppError, DEFAULT_TIMEOUT_MS, build_url_with_base, error_message_from_body};
    use crate::app_lib::config::AppConfig;
    use gloo_net::http::{Request, RequestBuilder, Response};
    use gloo_timers::callback::Timeout;
    use serde::{Serialize, de::DeserializeOwned};
    use web_sys::{AbortController, AbortSignal, RequestCredentials};

    /// Fetches JSON without credentials, used for public endpoints.
    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let url = build_url(path);
        let response = send_with_timeout(|signal| {
            Request::get(&url)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    /// Fetches JSON with cookies for session-authenticated APIs.
    pub async fn get_json_with_credentials<T: DeserializeOwned>(
        path: &str,
    ) -> Result<T, AppError> {
        let url = build_url(path);
        let response = send_with_timeout(|signal| {
            Request::get(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    /// Posts JSON with cookies and parses a JSON response.
    pub async fn post_json_with_credentials_response<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = build_url(path);
        send_json_with_credentials(Request::post(&url), body).await
    }

    /// Puts JSON with cookies and parses a JSON response.
    pub async fn put_json_with_credentials_response<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = build_url(path);
        send_json_with_credentials(Request::put(&url), body).await
    }

    /// Posts an empty body with cookies, used to clear a session.
    pub async fn post_empty_with_credentials(path: &str) -> Result<(), AppError> {
        let url = build_url(path);
        let response = send_with_timeout(move |signal| {
            Request::post(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .body("")
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_empty_response(response).await
    }

    async fn send_json_with_credentials<B: Serialize, T: DeserializeOwned>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = send_with_timeout(move |signal| {
            builder
                .header("Content-Type", "application/json")
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .body(payload)
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    /// Builds a URL from the configured API base URL and the provided path.
    fn build_url(path: &str) -> String {
        let config = AppConfig::load();
        build_url_with_base(&config.api_base_url, path)
    }

    /// Maps network errors into `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request with an abort timeout to avoid hanging UI state.
    async fn send_with_timeout(
        build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
        } else {
            Err(http_error(response).await)
        }
    }

    async fn handle_empty_response(response: Response) -> Result<(), AppError> {
        if response.ok() {
            Ok(())
        } else {
            Err(http_error(response).await)
        }
    }

    async fn http_error(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::Http {
            status,
            message: error_message_from_body(&body),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use transport::{
    get_json, get_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials_response, put_json_with_credentials_response,
};

/// Builds a URL from an explicit base URL and the provided path.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Reduces an HTTP error body to a short human message.
///
/// The API answers errors with `{"detail": "..."}`, or a list of validation
/// entries carrying `msg`. Other JSON shapes fall back to `message`/`error`
/// keys; anything else is treated as plain text. An empty result means the
/// body carried no message and the caller should use its own fallback.
pub(crate) fn error_message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let message = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["detail", "message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(message_from_value))
            .unwrap_or_default(),
        Ok(Value::String(text)) => text,
        _ => trimmed.to_string(),
    };

    message.trim().chars().take(MAX_ERROR_CHARS).collect()
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(entries) => entries.iter().find_map(|entry| {
            entry
                .get("msg")
                .and_then(Value::as_str)
                .map(str::to_string)
        }),
        _ => None,
    }
}
