use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::domain::GameConfig;
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Deserialize)]
struct RawStartQuery {
    pits: Option<String>,
    stones: Option<String>,
}

/// Optional `?pits=..&stones=..` overrides for a new game.
///
/// Either value may be omitted; the server default fills the gap when the
/// handler resolves the final config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartParams {
    pub pits: Option<usize>,
    pub stones: Option<u32>,
}

impl StartParams {
    pub fn from_query(query: &str) -> Result<Self, AppError> {
        let raw = web::Query::<RawStartQuery>::from_query(query)
            .map_err(|e| {
                AppError::bad_request(ErrorCode::InvalidGameConfig, format!("Malformed query: {e}"))
            })?
            .into_inner();

        Ok(Self {
            pits: raw.pits.as_deref().map(|v| parse("pits", v)).transpose()?,
            stones: raw.stones.as_deref().map(|v| parse("stones", v)).transpose()?,
        })
    }

    /// `None` when the request asked for nothing special.
    pub fn resolve(&self, defaults: GameConfig) -> Option<GameConfig> {
        if self.pits.is_none() && self.stones.is_none() {
            return None;
        }
        Some(GameConfig {
            pits_per_player: self.pits.unwrap_or(defaults.pits_per_player),
            stones_per_pit: self.stones.unwrap_or(defaults.stones_per_pit),
        })
    }
}

fn parse<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value.trim().parse::<T>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidGameConfig,
            format!("{name} must be a non-negative integer, got '{value}'"),
        )
    })
}

impl FromRequest for StartParams {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_query(req.query_string()))
    }
}
