//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `navigation`, `sidebar`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod navigation;
pub mod sidebar;
