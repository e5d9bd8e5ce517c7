use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::rules::{
    DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT, MAX_PITS_PER_PLAYER, MAX_STONES_PER_PIT,
    PLAYERS,
};

/// Board dimensions chosen when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub pits_per_player: usize,
    pub stones_per_pit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pits_per_player: DEFAULT_PITS_PER_PLAYER,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}

impl GameConfig {
    /// Build a validated config.
    pub fn new(pits_per_player: usize, stones_per_pit: u32) -> Result<Self, DomainError> {
        let config = Self {
            pits_per_player,
            stones_per_pit,
        };
        config.validate()?;
        Ok(config)
    }

    /// A board needs at least one pit per side. Zero stones is allowed and
    /// yields a game that is over before the first move.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.pits_per_player == 0 {
            return Err(DomainError::InvalidConfig(
                "pits per player must be at least 1".to_string(),
            ));
        }
        if self.pits_per_player > MAX_PITS_PER_PLAYER {
            return Err(DomainError::InvalidConfig(format!(
                "pits per player must be at most {MAX_PITS_PER_PLAYER}, got {}",
                self.pits_per_player
            )));
        }
        if self.stones_per_pit > MAX_STONES_PER_PIT {
            return Err(DomainError::InvalidConfig(format!(
                "stones per pit must be at most {MAX_STONES_PER_PIT}, got {}",
                self.stones_per_pit
            )));
        }
        Ok(())
    }

    /// Pits plus the store.
    pub fn places_per_player(&self) -> usize {
        self.pits_per_player + 1
    }

    pub fn total_stones(&self) -> u32 {
        (PLAYERS * self.pits_per_player) as u32 * self.stones_per_pit
    }
}
