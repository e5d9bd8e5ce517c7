use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::domain::PlayerId;
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Deserialize)]
struct RawMoveQuery {
    id: Option<String>,
    player: Option<String>,
    pit: Option<String>,
}

/// `?id=..&player=..&pit=..` parsed into typed move coordinates.
///
/// Rejects a missing id and missing or non-numeric player/pit before the
/// engine is consulted, with the same error body the engine's rejections use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveParams {
    pub game_id: String,
    pub player: PlayerId,
    pub pit: usize,
}

impl MoveParams {
    pub fn from_query(query: &str) -> Result<Self, AppError> {
        let raw = web::Query::<RawMoveQuery>::from_query(query)
            .map_err(|e| {
                AppError::bad_request(ErrorCode::InvalidMoveParams, format!("Malformed query: {e}"))
            })?
            .into_inner();

        let game_id = raw
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::bad_request(ErrorCode::MissingGameId, "Please supply a game id")
            })?;

        let (Some(player), Some(pit)) = (raw.player, raw.pit) else {
            return Err(AppError::bad_request(
                ErrorCode::InvalidMoveParams,
                "Please supply player and pit index to make a move",
            ));
        };

        Ok(Self {
            game_id,
            player: parse_index("player", &player, PlayerId::MAX)?,
            pit: parse_index("pit", &pit, usize::MAX)?,
        })
    }
}

/// Parse a run of decimal digits. Numbers too large for `T` saturate to
/// `max`, which no board accepts, so the engine still rejects them with
/// `InvalidPlayer` or `WrongPit` in its usual order.
fn parse_index<T>(name: &str, value: &str, max: T) -> Result<T, AppError>
where
    T: TryFrom<u64>,
{
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request(
            ErrorCode::InvalidMoveParams,
            format!("{name} must be a non-negative integer, got '{value}'"),
        ));
    }
    Ok(digits
        .parse::<u64>()
        .ok()
        .and_then(|n| T::try_from(n).ok())
        .unwrap_or(max))
}

impl FromRequest for MoveParams {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_query(req.query_string()))
    }
}
