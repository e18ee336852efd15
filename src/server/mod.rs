//! Web front end
//!
//! Serves the game over a small JSON API:
//!
//! | Method | Path               | Operation             |
//! |--------|--------------------|-----------------------|
//! | POST   | `/api/new_game`    | start a session       |
//! | POST   | `/api/guess`       | submit a guess        |
//! | GET    | `/api/game_status` | query a session       |

pub mod routes;

use crate::config::ServerConfig;
use crate::game::{GameService, SessionStore};
use crate::transliterate::Transliterator;
use actix_web::{App, HttpResponse, HttpServer, error, web};
use serde_json::json;
use tracing::info;

/// Register the API routes for a service of type `GameService<S, T>`
///
/// The service itself must be added with `App::app_data`.
pub fn configure<S, T>(cfg: &mut web::ServiceConfig)
where
    S: SessionStore + 'static,
    T: Transliterator + Send + Sync + 'static,
{
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Malformed request: {err}");
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "success": false, "message": message })),
        )
        .into()
    });

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .route("/new_game", web::post().to(routes::new_game::<S, T>))
            .route("/guess", web::post().to(routes::guess::<S, T>))
            .route("/game_status", web::get().to(routes::game_status::<S, T>)),
    );
}

/// Serve `service` until the process is stopped
///
/// # Errors
/// Returns an I/O error if the listener cannot be bound.
pub async fn run<S, T>(service: GameService<S, T>, config: &ServerConfig) -> std::io::Result<()>
where
    S: SessionStore + 'static,
    T: Transliterator + Send + Sync + 'static,
{
    let service = web::Data::new(service);

    info!(
        host = %config.host,
        port = config.port,
        words = service.bank().len(),
        max_attempts = service.config().max_attempts.get(),
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .configure(configure::<S, T>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
