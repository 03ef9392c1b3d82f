//! Shared frontend utilities for API access, configuration, errors, the
//! browser-local user cache, logging, and build metadata.
//!
//! ## Admin Session Flow
//!
//! 1. **Login:** The admin POSTs credentials to `/api/admin/login`; the API sets
//!    an `HttpOnly` session cookie and returns the user record, which is cached
//!    under the `admin_user` localStorage key.
//! 2. **Guard:** Every protected page visit calls `/api/admin/me`. A failure of
//!    any kind evicts the cached record and redirects to the login page.
//! 3. **Profile:** Email and password changes go to `/api/admin/profile` and
//!    always carry the current password for re-authentication.
//!
//! The cache is for display pre-fill only and never decides authentication.
//! Callers must avoid logging passwords or request bodies.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;
pub(crate) mod telemetry;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    get_json, get_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials_response, put_json_with_credentials_response,
};
pub(crate) use errors::AppError;
