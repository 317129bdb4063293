//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs the route guard for its own path, owns route-scoped
//! form state, and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod register;
pub mod store;
