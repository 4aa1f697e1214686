//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome while reading/writing shared state
//! from Leptos context providers.

pub mod icon;
pub mod sidebar;
pub mod text_field;
