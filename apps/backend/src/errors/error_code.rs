//! Error codes for the Mancala API.
//!
//! Every failure response carries one of these codes. Add new codes here;
//! never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes, rendered as SCREAMING_SNAKE_CASE in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move rules
    /// Player index is neither 0 nor 1
    InvalidPlayer,
    /// The other player is on turn
    NotYourTurn,
    /// Pit is a store or belongs to the other player
    WrongPit,
    /// Pit holds no stones
    EmptyPit,

    // Request validation
    /// Query string lacks the game id
    MissingGameId,
    /// Player or pit missing or not a non-negative integer
    InvalidMoveParams,
    /// Board dimensions rejected
    InvalidGameConfig,

    // Resource not found
    /// No game stored under the id
    GameNotFound,

    // System errors
    /// State store unreachable
    StoreUnavailable,
    /// Persisted state could not be decoded or restored
    DataCorruption,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::WrongPit => "WRONG_PIT",
            Self::EmptyPit => "EMPTY_PIT",

            Self::MissingGameId => "MISSING_GAME_ID",
            Self::InvalidMoveParams => "INVALID_MOVE_PARAMS",
            Self::InvalidGameConfig => "INVALID_GAME_CONFIG",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
