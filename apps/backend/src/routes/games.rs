//! Game routes: start a game, play a move, read a game back.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::{MoveKind, MoveOutcome, PlayerId, Winner, PLAYERS};
use crate::error::AppError;
use crate::extractors::{MoveParams, StartParams};
use crate::state::app_state::AppState;

/// Wire shape of an accepted move.
///
/// `error` is always false here; failures use [`crate::error::ErrorBody`],
/// which carries `error: true`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub error: bool,
    pub move_again: bool,
    pub game_ended: bool,
    pub results: [u32; PLAYERS],
    pub board: Vec<u32>,
    pub next_player: PlayerId,
    pub captured: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl From<MoveOutcome> for MoveResponse {
    fn from(outcome: MoveOutcome) -> Self {
        let captured = match outcome.kind {
            MoveKind::Capture { captured } => captured,
            MoveKind::ExtraTurn | MoveKind::TurnEnded => 0,
        };
        Self {
            error: false,
            move_again: outcome.move_again(),
            game_ended: outcome.game_ended,
            message: outcome.message(),
            results: outcome.scores,
            board: outcome.board,
            next_player: outcome.next_player,
            captured,
            winner: outcome.winner,
        }
    }
}

/// GET /start
///
/// Creates a game (optionally `?pits=&stones=`) and returns its persisted state.
async fn start_game(
    params: StartParams,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let games = &app_state.games;
    let state = games
        .start_game(params.resolve(games.default_config()))
        .await?;
    Ok(HttpResponse::Ok().json(state))
}

/// GET /move?id=&player=&pit=
async fn make_move(
    params: MoveParams,
    app_state: web::Data<AppState>,
) -> Result<web::Json<MoveResponse>, AppError> {
    let outcome = app_state
        .games
        .make_move(&params.game_id, params.player, params.pit)
        .await?;
    Ok(web::Json(outcome.into()))
}

/// GET /games/{game_id}
async fn get_game(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state.games.game(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/start", web::get().to(start_game))
        .route("/move", web::get().to(make_move))
        .route("/games/{game_id}", web::get().to(get_game));
}
