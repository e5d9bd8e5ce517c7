//! Infrastructure layer: assembling state from configuration.

pub mod state;
