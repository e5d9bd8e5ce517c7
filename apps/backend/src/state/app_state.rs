use std::sync::Arc;

use crate::domain::GameConfig;
use crate::services::GameService;
use crate::store::{GameStore, MemoryStore};

/// Application state shared by all workers.
#[derive(Clone)]
pub struct AppState {
    /// Game lifecycle service, wired to the configured store.
    pub games: Arc<GameService>,
}

impl AppState {
    pub fn new(store: Arc<dyn GameStore>, game_config: GameConfig) -> Self {
        Self {
            games: Arc::new(GameService::new(store, game_config)),
        }
    }

    /// State backed by a fresh in-memory store with default board settings.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), GameConfig::default())
    }

    pub fn store_backend(&self) -> &'static str {
        self.games.store().backend()
    }
}
