//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `feedback`, etc.) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod catalog;
pub mod feedback;
pub mod notify;
pub mod session;
pub mod ui;
