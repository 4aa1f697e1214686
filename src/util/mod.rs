//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, viewport,
//! timers) and routing decisions from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod routing;
pub mod session_store;
pub mod viewport;
