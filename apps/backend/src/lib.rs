#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod trace_ctx;

// Re-exports for public API
pub use config::{AppConfig, StoreKind};
pub use domain::{Game, GameConfig, GameState, MoveOutcome};
pub use error::AppError;
pub use infra::state::build_state;
pub use middleware::{RequestTrace, StructuredLogger};
pub use state::AppState;
pub use store::{GameStore, MemoryStore, RedisStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
