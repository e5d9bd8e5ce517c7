use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::{debug, info};

use super::{GameStore, StoreError};
use crate::domain::GameState;
use crate::error::AppError;

const KEY_PREFIX: &str = "mancala:game:";

/// Redis-backed store. Each game is one JSON string under
/// `mancala:game:{id}`.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)
            .map_err(|err| AppError::config(format!("Invalid REDIS_URL: {err}")))?;

        let manager = ConnectionManager::new(client).await.map_err(|err| {
            AppError::store_unavailable(format!("Unable to connect to Redis: {err}"))
        })?;

        info!("redis store connected");
        Ok(Self { manager })
    }

    pub(crate) fn key(id: &str) -> String {
        format!("{KEY_PREFIX}{id}")
    }
}

#[async_trait]
impl GameStore for RedisStore {
    async fn put(&self, state: &GameState) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(state)?;
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(Self::key(&state.id), encoded).await?;
        debug!(game_id = %state.id, "redis store put");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<GameState>, StoreError> {
        let mut conn = self.manager.clone();
        let raw: Option<String> = conn.get(Self::key(id)).await?;
        raw.map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
