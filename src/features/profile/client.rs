//! Client wrapper for the admin profile endpoint.

use crate::{
    app_lib::AppError,
    features::profile::types::{ProfileUpdate, UpdateProfileResponse},
};

pub const PROFILE_PATH: &str = "/api/admin/profile";

/// Re-authenticated profile mutation.
pub(crate) trait ProfileApi {
    /// Sends one update. `current_password` is always part of the request.
    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<UpdateProfileResponse, AppError>;
}

/// `ProfileApi` over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProfileApi;

#[cfg(target_arch = "wasm32")]
impl ProfileApi for HttpProfileApi {
    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<UpdateProfileResponse, AppError> {
        crate::app_lib::put_json_with_credentials_response(PROFILE_PATH, update).await
    }
}
