//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth redirects, page-local
//! state) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod not_found;
