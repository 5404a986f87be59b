//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate encoding, form assembly and browser concerns from
//! page and component logic to improve reuse and testability.

#[cfg(feature = "csr")]
pub mod browser;
pub mod decode;
pub mod form;
pub mod resource;
