//! HTTP handlers
//!
//! JSON in, JSON out. Every reply carries a `success` flag; rejected requests
//! also get a 4xx status and a human-readable `message`.

use crate::core::{Decomposition, GuessOutcome, Word};
use crate::game::{
    GameError, GameService, GuessError, GuessRecord, GuessReport, SessionId, SessionStore,
};
use crate::transliterate::Transliterator;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Body of `POST /api/guess`
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    game_id: Option<String>,
    #[serde(default)]
    word: String,
}

/// Query of `GET /api/game_status`
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    game_id: Option<String>,
}

#[derive(Serialize)]
struct Rejection {
    success: bool,
    message: String,
}

/// Guess that was counted but could not be scored
#[derive(Serialize)]
struct ProcessingFailure<'a> {
    success: bool,
    message: String,
    attempts: u32,
    game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_word: Option<&'a Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_details: Option<&'a Decomposition>,
}

#[derive(Serialize)]
struct StartReply {
    success: bool,
    game_id: SessionId,
    max_attempts: u32,
}

#[derive(Serialize)]
struct GuessReply<'a> {
    success: bool,
    result: &'a GuessOutcome,
    game_over: bool,
    attempts: u32,
    max_attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    won: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_word: Option<&'a Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_details: Option<&'a Decomposition>,
}

impl<'a> GuessReply<'a> {
    fn from_report(report: &'a GuessReport) -> Self {
        let finished = report.is_finished();
        let reveal = report.reveal.as_ref();

        let message = if report.is_won() {
            Some(format!("🎉 Solved on attempt {}!", report.attempts))
        } else {
            reveal.map(|r| format!("😞 Game over! The answer was {}", r.target_word))
        };

        Self {
            success: true,
            result: &report.outcome,
            game_over: finished,
            attempts: report.attempts,
            max_attempts: report.max_attempts,
            won: finished.then(|| report.is_won()),
            remaining: (!finished).then(|| report.remaining()),
            message,
            target_word: reveal.map(|r| &r.target_word),
            target_details: reveal.map(|r| &r.target_details),
        }
    }
}

#[derive(Serialize)]
struct StatusReply<'a> {
    success: bool,
    attempts: u32,
    max_attempts: u32,
    game_over: bool,
    won: bool,
    guess_history: &'a [GuessRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    target_word: Option<&'a Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_details: Option<&'a Decomposition>,
}

fn reject(status: actix_web::http::StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(Rejection {
        success: false,
        message: message.into(),
    })
}

fn error_response(err: &GameError) -> HttpResponse {
    use actix_web::http::StatusCode;

    match err {
        GameError::UnknownSession(_) => reject(
            StatusCode::NOT_FOUND,
            "Invalid game session, please start a new game",
        ),
        GameError::Guess(GuessError::InvalidLength(_)) => reject(
            StatusCode::BAD_REQUEST,
            "Please enter a four-character word",
        ),
        GameError::Guess(GuessError::SessionFinished) => {
            reject(StatusCode::CONFLICT, "The game is already over")
        }
        GameError::Guess(GuessError::Processing {
            attempts, reveal, ..
        }) => HttpResponse::UnprocessableEntity().json(ProcessingFailure {
            success: false,
            message: format!("Error while processing the word: {err}"),
            attempts: *attempts,
            game_over: reveal.is_some(),
            target_word: reveal.as_ref().map(|r| &r.target_word),
            target_details: reveal.as_ref().map(|r| &r.target_details),
        }),
        GameError::Start(_) => reject(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

fn parse_game_id(raw: Option<&str>) -> Result<SessionId, HttpResponse> {
    use actix_web::http::StatusCode;

    let invalid = || {
        reject(
            StatusCode::NOT_FOUND,
            "Invalid game session, please start a new game",
        )
    };

    match raw {
        Some(raw) if !raw.trim().is_empty() => raw.parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// `POST /api/new_game`
pub async fn new_game<S, T>(service: web::Data<GameService<S, T>>) -> HttpResponse
where
    S: SessionStore + 'static,
    T: Transliterator + Send + Sync + 'static,
{
    match service.start() {
        Ok(started) => HttpResponse::Ok().json(StartReply {
            success: true,
            game_id: started.game_id,
            max_attempts: started.max_attempts,
        }),
        Err(err) => {
            warn!(%err, "failed to start game");
            error_response(&err)
        }
    }
}

/// `POST /api/guess`
pub async fn guess<S, T>(
    service: web::Data<GameService<S, T>>,
    body: web::Json<GuessRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    T: Transliterator + Send + Sync + 'static,
{
    let id = match parse_game_id(body.game_id.as_deref()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.guess(&id, body.word.trim()) {
        Ok(report) => {
            if report.is_finished() {
                info!(game_id = %id, won = report.is_won(), attempts = report.attempts, "game over");
            }
            HttpResponse::Ok().json(GuessReply::from_report(&report))
        }
        Err(err) => error_response(&err),
    }
}

/// `GET /api/game_status`
pub async fn game_status<S, T>(
    service: web::Data<GameService<S, T>>,
    query: web::Query<StatusQuery>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    T: Transliterator + Send + Sync + 'static,
{
    let id = match parse_game_id(query.game_id.as_deref()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.status(&id) {
        Ok(status) => HttpResponse::Ok().json(StatusReply {
            success: true,
            attempts: status.attempts,
            max_attempts: status.max_attempts,
            game_over: status.finished,
            won: status.won,
            guess_history: &status.history,
            target_word: status.reveal.as_ref().map(|r| &r.target_word),
            target_details: status.reveal.as_ref().map(|r| &r.target_details),
        }),
        Err(err) => error_response(&err),
    }
}
