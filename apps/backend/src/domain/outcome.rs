use serde::{Deserialize, Serialize};

use crate::domain::rules::{PlayerId, PLAYERS};

/// Which post-sowing rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveKind {
    /// Last stone landed in the mover's store.
    ExtraTurn,
    /// Last stone landed in an empty own pit; `captured` stones were banked.
    Capture { captured: u32 },
    TurnEnded,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "player", rename_all = "snake_case")]
pub enum Winner {
    Player(PlayerId),
    Draw,
}

impl Winner {
    pub fn from_scores(scores: [u32; PLAYERS]) -> Self {
        match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => Winner::Player(0),
            std::cmp::Ordering::Less => Winner::Player(1),
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}

/// Outcome of one accepted `pick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub kind: MoveKind,
    pub game_ended: bool,
    pub scores: [u32; PLAYERS],
    pub board: Vec<u32>,
    pub next_player: PlayerId,
    pub winner: Option<Winner>,
}

impl MoveOutcome {
    pub fn move_again(&self) -> bool {
        matches!(self.kind, MoveKind::ExtraTurn)
    }

    /// Notification text for the mover.
    pub fn message(&self) -> String {
        let player = self.player;
        let turn = match self.kind {
            MoveKind::ExtraTurn => return format!("Player {player} plays again"),
            MoveKind::Capture { captured } => {
                format!("Player {player} captured {captured} stones. Turn has ended.")
            }
            MoveKind::TurnEnded => format!("Player {player}'s turn has ended."),
        };
        match self.winner {
            Some(Winner::Player(w)) => format!("{turn} Game over, player {w} wins."),
            Some(Winner::Draw) => format!("{turn} Game over, it is a draw."),
            None => turn,
        }
    }
}
