//! Networking modules for the hosted auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` performs the REST calls, `session` persists and restores the token
//! pair between page loads, and `types` defines the wire schema.

pub mod auth;
pub mod session;
pub mod types;
