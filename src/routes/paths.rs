//! Client-side route paths. The admin area lives under an unlisted prefix.

pub const LANDING: &str = "/";
pub const HEALTH: &str = "/health";
pub const ADMIN_DASHBOARD: &str = "/ghs-control-panel-2026";
pub const ADMIN_LOGIN: &str = "/ghs-control-panel-2026/login";
