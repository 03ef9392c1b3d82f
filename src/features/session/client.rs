//! Client wrappers for the admin session endpoints. All calls include
//! credentials so the `HttpOnly` session cookie travels with them.

use crate::{app_lib::AppError, features::session::types::UserRecord};
#[cfg(target_arch = "wasm32")]
use crate::{
    app_lib::{
        get_json_with_credentials, post_empty_with_credentials,
        post_json_with_credentials_response,
    },
    features::session::types::{LoginRequest, UserEnvelope},
};

pub const ME_PATH: &str = "/api/admin/me";
pub const LOGIN_PATH: &str = "/api/admin/login";
pub const LOGOUT_PATH: &str = "/api/admin/logout";

/// "Who am I" check against the API.
pub(crate) trait IdentityApi {
    /// Returns the current admin, or an error when the session is missing,
    /// expired, or the API cannot be reached.
    async fn check(&self) -> Result<UserRecord, AppError>;
}

/// `IdentityApi` over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpIdentityApi;

#[cfg(target_arch = "wasm32")]
impl IdentityApi for HttpIdentityApi {
    async fn check(&self) -> Result<UserRecord, AppError> {
        get_json_with_credentials(ME_PATH).await
    }
}

/// Logs in and lets the server set the session cookie.
/// Must never log the request, which carries the password.
#[cfg(target_arch = "wasm32")]
pub async fn login(request: &LoginRequest) -> Result<UserEnvelope, AppError> {
    post_json_with_credentials_response(LOGIN_PATH, request).await
}

/// Clears the current session on the server.
#[cfg(target_arch = "wasm32")]
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials(LOGOUT_PATH).await
}
