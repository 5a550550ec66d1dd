use crate::app_context::{AppContext, RequestContext};
use crate::games::responses::{
    CreateGameResponse, DeleteGameResponse, GameStateResponse, SubmitGuessResponse,
};
use crate::games::services::{CreateGameHttpHandler, GameHttpHandler};
use crate::geo::models::LatLng;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CreateGameResponse> {
    let response = CreateGameHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn state(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GameStateResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .state()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn start(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GameStateResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .start()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn place_guess(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(guess): Json<LatLng>,
) -> Json<GameStateResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .place_guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit_guess(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SubmitGuessResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .submit_guess()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn advance_round(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GameStateResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .advance_round()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn restart(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GameStateResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .restart()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn retry_lookup(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GameStateResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .retry_lookup()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn delete(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<DeleteGameResponse> {
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .delete()
        .await;
    Json(response)
}
