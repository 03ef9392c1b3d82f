//! API health reporting for the diagnostics page.

pub(crate) mod client;
pub(crate) mod types;
