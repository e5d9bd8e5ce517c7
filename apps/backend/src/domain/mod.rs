//! Domain layer: the Kalah rule engine, free of HTTP and storage concerns.

pub mod board;
pub mod config;
pub mod errors;
pub mod game;
pub mod outcome;
pub mod rules;
pub mod state;

#[cfg(test)]
mod tests_rules;

pub use board::Board;
pub use config::GameConfig;
pub use errors::DomainError;
pub use game::Game;
pub use outcome::{MoveKind, MoveOutcome, Winner};
pub use rules::{PlayerId, PLAYERS};
pub use state::GameState;
