//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` for the session, `login` for the login
//! form) so components depend on small focused models.

pub mod auth;
pub mod login;
