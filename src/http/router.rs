use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{games, health, http::cors};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(
    args: &Args,
    app_context: AppContext<HashMapSessionsStorage>,
) -> Result<Router, http::header::InvalidHeaderValue> {
    let cors_policy = cors::layer(args)?;
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let games_routes = Router::new()
        .route("/", post(games::handlers::create))
        .route(
            "/:game-id",
            get(games::handlers::state).delete(games::handlers::delete),
        )
        .route("/:game-id/start", post(games::handlers::start))
        .route("/:game-id/guess", post(games::handlers::place_guess))
        .route("/:game-id/submit", post(games::handlers::submit_guess))
        .route("/:game-id/advance", post(games::handlers::advance_round))
        .route("/:game-id/restart", post(games::handlers::restart))
        .route("/:game-id/retry-lookup", post(games::handlers::retry_lookup));

    Ok(Router::new()
        .nest("/health", health_routes)
        .nest("/games", games_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing)))
}
