use serde::{Deserialize, Serialize};

use crate::domain::rules::PlayerId;

/// Persisted snapshot of a game: everything needed to resume it.
///
/// Board dimensions are implied by `board.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: String,
    pub board: Vec<u32>,
    pub next_player: PlayerId,
}
