//! Shared UI components exported for routes.

pub(crate) mod layout;
mod profile_settings;
mod protected_route;
mod sign_out;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use profile_settings::ProfileSettings;
pub(crate) use protected_route::ProtectedRoute;
pub(crate) use sign_out::SignOutButton;
pub(crate) use ui::{Alert, AlertKind, Button, ButtonVariant, Spinner};
