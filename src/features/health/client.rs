//! Client helper for the public health endpoint.

#[cfg(target_arch = "wasm32")]
use crate::{
    app_lib::{AppError, get_json},
    features::health::types::HealthStatus,
};

pub const HEALTH_PATH: &str = "/health";

/// Fetches the API health document. No credentials are sent.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_health() -> Result<HealthStatus, AppError> {
    get_json(HEALTH_PATH).await
}
