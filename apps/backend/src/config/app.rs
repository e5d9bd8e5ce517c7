//! Process configuration read from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::GameConfig;
use crate::error::AppError;
use crate::store::MemoryStoreConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Which [`GameStore`](crate::store::GameStore) backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory(MemoryStoreConfig),
    Redis { url: String },
}

impl StoreKind {
    pub fn name(&self) -> &'static str {
        match self {
            StoreKind::Memory(_) => "memory",
            StoreKind::Redis { .. } => "redis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub game: GameConfig,
}

impl AppConfig {
    /// Read `MANCALA_*` and `REDIS_URL` from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("MANCALA_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("MANCALA_PORT", lookup("MANCALA_PORT"), DEFAULT_PORT)?;

        let store = match lookup("MANCALA_STORE")
            .unwrap_or_else(|| "memory".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => StoreKind::Memory(memory_config(&lookup)?),
            "redis" => {
                let url = lookup("REDIS_URL").ok_or_else(|| {
                    AppError::config("REDIS_URL must be set when MANCALA_STORE=redis")
                })?;
                StoreKind::Redis { url }
            }
            other => {
                return Err(AppError::config(format!(
                    "MANCALA_STORE must be 'memory' or 'redis', got '{other}'"
                )))
            }
        };

        let defaults = GameConfig::default();
        let game = GameConfig {
            pits_per_player: parse_or(
                "MANCALA_PITS_PER_PLAYER",
                lookup("MANCALA_PITS_PER_PLAYER"),
                defaults.pits_per_player,
            )?,
            stones_per_pit: parse_or(
                "MANCALA_STONES_PER_PIT",
                lookup("MANCALA_STONES_PER_PIT"),
                defaults.stones_per_pit,
            )?,
        };
        game.validate()
            .map_err(|e| AppError::config(format!("default game config: {e}")))?;

        Ok(Self {
            host,
            port,
            store,
            game,
        })
    }
}

fn memory_config<F>(lookup: &F) -> Result<MemoryStoreConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = MemoryStoreConfig::default();
    let max_games = parse_or(
        "MANCALA_MEMORY_MAX_GAMES",
        lookup("MANCALA_MEMORY_MAX_GAMES"),
        defaults.max_games,
    )?;
    let idle_secs = parse_or(
        "MANCALA_MEMORY_IDLE_SECS",
        lookup("MANCALA_MEMORY_IDLE_SECS"),
        defaults.idle_timeout.as_secs(),
    )?;
    if max_games == 0 || idle_secs == 0 {
        return Err(AppError::config(
            "MANCALA_MEMORY_MAX_GAMES and MANCALA_MEMORY_IDLE_SECS must be at least 1",
        ));
    }
    Ok(MemoryStoreConfig {
        max_games,
        idle_timeout: Duration::from_secs(idle_secs),
    })
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("{name} has an invalid value: '{value}'"))
        }),
    }
}
