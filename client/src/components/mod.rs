//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome. Data arrives as props from the
//! route-level pages; none of them read global state directly.

pub mod dashboard_layout;
pub mod footer;
pub mod sidebar;
