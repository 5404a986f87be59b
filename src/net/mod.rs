//! Networking modules for the pipeline HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the submission exchange and health probe, and `types`
//! defines the wire schema plus its normalized outcome.

pub mod api;
pub mod types;
