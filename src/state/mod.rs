//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` status machine, `gallery` previews,
//! `result` rendering) and composed by `submission`, which is the only
//! value the pipeline page keeps in a signal.

pub mod gallery;
pub mod result;
pub mod submission;
pub mod ui;
