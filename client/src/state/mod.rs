//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each preference is a small plain model (`theme`, `language`) built on the
//! two-phase `preference` value and provided as an `RwSignal` context from
//! `App`. Toasts live in their own queue.

pub mod language;
pub mod preference;
pub mod theme;
pub mod toast;
