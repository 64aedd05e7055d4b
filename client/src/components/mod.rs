//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome (navigation, notifications) while
//! reading/writing shared state from Leptos context providers.

pub mod navbar;
pub mod toaster;
