use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use super::{GameStore, StoreError};
use crate::domain::GameState;

pub const DEFAULT_MAX_GAMES: u64 = 10_000;
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Bounds for the in-process store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStoreConfig {
    /// Games kept before the least useful ones are evicted.
    pub max_games: u64,
    /// Games untouched for this long are dropped.
    pub idle_timeout: Duration,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            max_games: DEFAULT_MAX_GAMES,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

/// Process-local store. Games are lost on restart, and abandoned or excess
/// games are evicted according to [`MemoryStoreConfig`].
#[derive(Clone)]
pub struct MemoryStore {
    games: Cache<String, GameState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_config(MemoryStoreConfig::default())
    }

    pub fn with_config(config: MemoryStoreConfig) -> Self {
        let games = Cache::builder()
            .max_capacity(config.max_games)
            .time_to_idle(config.idle_timeout)
            .eviction_listener(|id, _state: GameState, cause| {
                debug!(game_id = %id, cause = ?cause, "memory store evicted game");
            })
            .build();
        Self { games }
    }

    /// Approximate number of stored games; pending evictions may lag.
    pub fn entry_count(&self) -> u64 {
        self.games.entry_count()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn put(&self, state: &GameState) -> Result<(), StoreError> {
        debug!(game_id = %state.id, "memory store put");
        self.games.insert(state.id.clone(), state.clone()).await;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<GameState>, StoreError> {
        Ok(self.games.get(id).await)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
