//! Game lifecycle service: start games, apply moves, read games back.
//!
//! The engine is synchronous and knows nothing about storage. This service
//! owns the load → pick → save cycle and serializes it per game id, so two
//! requests for the same game never interleave inside one process.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, warn};

use crate::domain::{Game, GameConfig, GameState, MoveOutcome, PlayerId, Winner, PLAYERS};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::store::GameStore;

/// Read model returned by `GET /games/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: String,
    pub board: Vec<u32>,
    pub next_player: PlayerId,
    pub scores: [u32; PLAYERS],
    pub game_ended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id().to_string(),
            board: game.board().slots().to_vec(),
            next_player: game.next_player(),
            scores: game.scores(),
            game_ended: game.is_over(),
            winner: game.winner(),
        }
    }
}

/// Holds one game's mutex. Dropping it, including when the request future is
/// cancelled mid-move, releases the mutex and prunes the registry entry once
/// nobody else waits on it.
struct GameLock<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    game_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for GameLock<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks
            .remove_if(&self.game_id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

pub struct GameService {
    store: Arc<dyn GameStore>,
    default_config: GameConfig,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>, default_config: GameConfig) -> Self {
        Self {
            store,
            default_config,
            locks: DashMap::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn GameStore> {
        &self.store
    }

    pub fn default_config(&self) -> GameConfig {
        self.default_config
    }

    /// Create and persist a new game. `config` overrides the service default.
    pub async fn start_game(&self, config: Option<GameConfig>) -> Result<GameState, AppError> {
        let config = config.unwrap_or(self.default_config);
        let game = Game::new(config)?;
        let state = game.state();

        self.store.put(&state).await?;

        info!(
            game_id = %state.id,
            pits_per_player = config.pits_per_player,
            stones_per_pit = config.stones_per_pit,
            "game started"
        );
        Ok(state)
    }

    /// Apply one move and persist the result before returning it.
    ///
    /// Rejected moves are not written back.
    pub async fn make_move(
        &self,
        game_id: &str,
        player: PlayerId,
        pit: usize,
    ) -> Result<MoveOutcome, AppError> {
        let _guard = self.lock(game_id).await;

        let mut game = self.load(game_id).await?;

        let outcome = game.pick(player, pit).map_err(|err| {
            warn!(game_id, player, pit, error = %err, "move rejected");
            AppError::from(err)
        })?;

        self.store.put(&game.state()).await?;

        info!(
            game_id,
            player,
            pit,
            move_again = outcome.move_again(),
            game_ended = outcome.game_ended,
            "move applied"
        );
        if outcome.game_ended {
            info!(game_id, scores = ?outcome.scores, winner = ?outcome.winner, "game over");
        }
        Ok(outcome)
    }

    pub async fn game(&self, game_id: &str) -> Result<GameView, AppError> {
        let game = self.load(game_id).await?;
        Ok(GameView::from(&game))
    }

    async fn load(&self, game_id: &str) -> Result<Game, AppError> {
        let state = self.store.get(game_id).await?.ok_or_else(|| {
            AppError::not_found(ErrorCode::GameNotFound, format!("Game {game_id} not found"))
        })?;
        Ok(Game::restore(state)?)
    }

    async fn lock(&self, game_id: &str) -> GameLock<'_> {
        let mutex = self
            .locks
            .entry(game_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        GameLock {
            locks: &self.locks,
            game_id: game_id.to_string(),
            guard: Some(mutex.lock_owned().await),
        }
    }

    #[cfg(test)]
    pub(crate) fn lock_entries(&self) -> usize {
        self.locks.len()
    }
}
