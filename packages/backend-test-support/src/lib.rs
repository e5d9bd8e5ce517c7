//! Test support for the Mancala backend.
//!
//! Shared by the backend's unit and integration tests: one-time tracing
//! initialization and assertions over the uniform error body.

pub mod error_body;
pub mod logging;
