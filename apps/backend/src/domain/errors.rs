use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules::PlayerId;

/// Rule violations and malformed inputs detected by the engine.
///
/// Move rejections leave the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidPlayer(PlayerId),
    NotYourTurn(PlayerId),
    WrongPit { player: PlayerId, pit: usize },
    EmptyPit(usize),
    InvalidConfig(String),
    CorruptState(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidPlayer(p) => write!(f, "Not a valid player: {p}"),
            DomainError::NotYourTurn(p) => write!(f, "It is not your turn, player {p}"),
            DomainError::WrongPit { player, pit } => {
                write!(f, "Player {player} selected a wrong pit: {pit}")
            }
            DomainError::EmptyPit(pit) => write!(f, "Selected pit is empty: {pit}"),
            DomainError::InvalidConfig(s) => write!(f, "invalid game config: {s}"),
            DomainError::CorruptState(s) => write!(f, "corrupt game state: {s}"),
        }
    }
}

impl Error for DomainError {}
