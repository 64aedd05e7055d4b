//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped content and delegates shared chrome to
//! `components`.

pub mod home;
pub mod login;
pub mod toast_example;
