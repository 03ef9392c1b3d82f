//! Admin session feature: identity checks, the one-shot guard, the explicit
//! session context, and the browser-local user cache. This module sits on a
//! security boundary for UX only; the API remains the authority on access and
//! nothing here may log passwords or cookies.
//!
//! Flow Overview: a protected page mounts a guard, the guard asks the context
//! to run one identity check, and the resulting `GuardState` drives both the
//! rendered view and a separate redirect effect.

pub(crate) mod cache;
pub(crate) mod client;
pub(crate) mod context;
pub(crate) mod guard;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
