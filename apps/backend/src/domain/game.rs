//! The Kalah rule engine.
//!
//! A [`Game`] owns a board and whose turn it is. [`Game::pick`] is the only
//! mutator after construction; everything else reads the current board.

use uuid::Uuid;

use crate::domain::board::Board;
use crate::domain::config::GameConfig;
use crate::domain::errors::DomainError;
use crate::domain::outcome::{MoveKind, MoveOutcome, Winner};
use crate::domain::rules::{is_valid_player, opponent, PlayerId, PLAYERS};
use crate::domain::state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: String,
    board: Board,
    next_player: PlayerId,
}

impl Game {
    /// Start a game with a freshly generated id. Player 0 moves first.
    pub fn new(config: GameConfig) -> Result<Self, DomainError> {
        Self::with_id(Uuid::new_v4().to_string(), config)
    }

    pub fn with_id(id: impl Into<String>, config: GameConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            id: id.into(),
            board: Board::new(&config),
            next_player: 0,
        })
    }

    /// Rehydrate from a persisted snapshot.
    ///
    /// The board shape and turn are checked; stone counts are taken as-is.
    pub fn restore(state: GameState) -> Result<Self, DomainError> {
        if !is_valid_player(state.next_player) {
            return Err(DomainError::CorruptState(format!(
                "next player must be 0 or 1, got {}",
                state.next_player
            )));
        }
        Ok(Self {
            id: state.id,
            board: Board::from_slots(state.board)?,
            next_player: state.next_player,
        })
    }

    pub fn state(&self) -> GameState {
        GameState {
            id: self.id.clone(),
            board: self.board.slots().to_vec(),
            next_player: self.next_player,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> PlayerId {
        self.next_player
    }

    /// Pits plus store for each player.
    pub fn scores(&self) -> [u32; PLAYERS] {
        [self.board.score(0), self.board.score(1)]
    }

    pub fn is_over(&self) -> bool {
        self.board.has_empty_side()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.is_over().then(|| Winner::from_scores(self.scores()))
    }

    /// Play the stones in `pit` for `player`.
    ///
    /// Rejected moves leave the game unchanged. When the move ends the game,
    /// each side's leftover pit stones are swept into that side's store.
    pub fn pick(&mut self, player: PlayerId, pit: usize) -> Result<MoveOutcome, DomainError> {
        self.check_move(player, pit)?;

        let landing = self.board.sow(player, pit);

        if self.board.is_store_of(player, landing) {
            return Ok(self.outcome(player, MoveKind::ExtraTurn, false));
        }

        let kind = if self.board.is_own_pit(player, landing) && self.board.stones(landing) == 1 {
            MoveKind::Capture {
                captured: self.board.capture(player, landing),
            }
        } else {
            MoveKind::TurnEnded
        };

        self.next_player = opponent(player);

        let game_ended = self.board.has_empty_side();
        if game_ended {
            self.board.sweep();
        }

        Ok(self.outcome(player, kind, game_ended))
    }

    fn check_move(&self, player: PlayerId, pit: usize) -> Result<(), DomainError> {
        if !is_valid_player(player) {
            return Err(DomainError::InvalidPlayer(player));
        }
        if player != self.next_player {
            return Err(DomainError::NotYourTurn(player));
        }
        if !self.board.is_own_pit(player, pit) {
            return Err(DomainError::WrongPit { player, pit });
        }
        if self.board.stones(pit) == 0 {
            return Err(DomainError::EmptyPit(pit));
        }
        Ok(())
    }

    fn outcome(&self, player: PlayerId, kind: MoveKind, game_ended: bool) -> MoveOutcome {
        let scores = self.scores();
        MoveOutcome {
            player,
            kind,
            game_ended,
            scores,
            board: self.board.slots().to_vec(),
            next_player: self.next_player,
            winner: game_ended.then(|| Winner::from_scores(scores)),
        }
    }
}
