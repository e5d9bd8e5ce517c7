//! Error codes for the Mancala backend.

pub mod error_code;

pub use error_code::ErrorCode;
