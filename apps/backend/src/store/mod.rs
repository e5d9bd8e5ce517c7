//! Persistence for game snapshots.
//!
//! The service talks to a [`GameStore`] trait object so the backend can be
//! swapped between process memory and Redis without touching the engine.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::GameState;

pub mod memory;
pub mod redis_store;

pub use memory::{MemoryStore, MemoryStoreConfig};
pub use redis_store::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("stored game could not be decoded: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Key-value persistence of [`GameState`] records by game id.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert or replace the record under `state.id`.
    async fn put(&self, state: &GameState) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<GameState>, StoreError>;

    /// Cheap liveness check for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
