//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (document root,
//! storage, ambient signals) from state and component logic to improve reuse
//! and testability.

pub mod document;
pub mod environment;
pub mod init_script;
pub mod platform;
pub mod storage;
