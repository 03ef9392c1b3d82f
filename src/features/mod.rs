//! Domain-level frontend features and their shared logic. Routes and
//! components import these modules so view code stays focused on rendering
//! while session handling, validation, and API access live here.

pub(crate) mod health;
pub(crate) mod profile;
pub(crate) mod session;
