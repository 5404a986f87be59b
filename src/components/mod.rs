//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the status card, preview gallery and pipeline health
//! badge while reading shared state from Leptos context providers.

pub mod health_badge;
pub mod result_gallery;
pub mod status_card;
