//! Profile settings feature: re-authenticated email and password changes.
//!
//! Validation and the per-form state machine live here so the panel only
//! renders state and forwards input. Passwords are wrapped in `SecretString`
//! once a submission passes validation and must never be logged.

pub(crate) mod client;
pub(crate) mod types;
pub(crate) mod validation;
pub(crate) mod workflow;
