use std::sync::Arc;

use tracing::info;

use crate::config::StoreKind;
use crate::domain::GameConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::store::{GameStore, MemoryStore, MemoryStoreConfig, RedisStore};

enum StoreChoice {
    Kind(StoreKind),
    Instance(Arc<dyn GameStore>),
}

/// Builder for [`AppState`] instances (used in both tests and main).
pub struct StateBuilder {
    store: StoreChoice,
    game_config: GameConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: StoreChoice::Kind(StoreKind::Memory(MemoryStoreConfig::default())),
            game_config: GameConfig::default(),
        }
    }

    pub fn with_store(mut self, kind: StoreKind) -> Self {
        self.store = StoreChoice::Kind(kind);
        self
    }

    /// Use an already constructed store, e.g. a shared test fixture.
    pub fn with_store_instance(mut self, store: Arc<dyn GameStore>) -> Self {
        self.store = StoreChoice::Instance(store);
        self
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        self.game_config.validate()?;

        let store: Arc<dyn GameStore> = match self.store {
            StoreChoice::Instance(store) => store,
            StoreChoice::Kind(StoreKind::Memory(config)) => {
                Arc::new(MemoryStore::with_config(config))
            }
            StoreChoice::Kind(StoreKind::Redis { url }) => {
                Arc::new(RedisStore::connect(&url).await?)
            }
        };

        info!(store = store.backend(), "application state ready");
        Ok(AppState::new(store, self.game_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
