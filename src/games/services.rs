use crate::app_context::{AppContext, RequestContext};
use crate::games::responses::{
    CreateGameResponse, DeleteGameResponse, GameStateResponse, SubmitGuessResponse,
};
use crate::geo::models::LatLng;
use crate::storage::interface::{
    ISessionStorage, SessionError, SessionGameFlowHandler, SessionRepo,
};
use std::time::Instant;

pub struct CreateGameHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateGameHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateGameResponse {
        let sessions = &self.app_context.sessions;
        let game_id = sessions
            .create(
                self.app_context.config.as_ref().clone(),
                self.app_context.lookups.clone(),
            )
            .await;
        let now = Instant::now();
        let game = match sessions.start_game(&game_id, now).await {
            Ok(()) => sessions.snapshot(&game_id, now).await.ok(),
            Err(e) => {
                tracing::error!(task = "game_not_started", game_id = %game_id, reason = %e);
                None
            }
        };
        tracing::info!(task = "game_created", game_id = %game_id);
        CreateGameResponse {
            error: game.is_none(),
            game_id,
            game,
        }
    }
}

pub struct GameHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> GameHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    fn game_id(&self) -> &str {
        &self.request_context.game_id
    }

    pub async fn state(&self) -> GameStateResponse {
        let result = self
            .app_context
            .sessions
            .snapshot(self.game_id(), Instant::now())
            .await;
        GameStateResponse::from_result(result)
    }

    pub async fn start(&self) -> GameStateResponse {
        let now = Instant::now();
        let result = self.app_context.sessions.start_game(self.game_id(), now).await;
        self.respond_with_state(result, now).await
    }

    pub async fn place_guess(&self, guess: LatLng) -> GameStateResponse {
        let result = self
            .app_context
            .sessions
            .place_guess(self.game_id(), guess)
            .await;
        self.respond_with_state(result, Instant::now()).await
    }

    pub async fn submit_guess(&self) -> SubmitGuessResponse {
        let sessions = &self.app_context.sessions;
        let now = Instant::now();
        match sessions.submit_guess(self.game_id(), now).await {
            Ok(round) => {
                let total_score = sessions
                    .snapshot(self.game_id(), now)
                    .await
                    .ok()
                    .map(|game| game.state.total_score);
                SubmitGuessResponse {
                    error: false,
                    error_code: None,
                    round: Some(round),
                    total_score,
                }
            }
            Err(e) => SubmitGuessResponse {
                error: true,
                error_code: Some(e.into()),
                round: None,
                total_score: None,
            },
        }
    }

    pub async fn advance_round(&self) -> GameStateResponse {
        let now = Instant::now();
        let result = self
            .app_context
            .sessions
            .advance_round(self.game_id(), now)
            .await;
        self.respond_with_state(result, now).await
    }

    pub async fn restart(&self) -> GameStateResponse {
        let result = self.app_context.sessions.restart(self.game_id()).await;
        self.respond_with_state(result, Instant::now()).await
    }

    pub async fn retry_lookup(&self) -> GameStateResponse {
        let now = Instant::now();
        let result = self
            .app_context
            .sessions
            .retry_lookup(self.game_id(), now)
            .await;
        self.respond_with_state(result, now).await
    }

    pub async fn delete(&self) -> DeleteGameResponse {
        if self.app_context.sessions.remove(self.game_id()).await {
            tracing::info!(task = "game_deleted", game_id = %self.game_id());
            DeleteGameResponse {
                error: false,
                error_code: None,
            }
        } else {
            DeleteGameResponse {
                error: true,
                error_code: Some(SessionError::GameNotFound.into()),
            }
        }
    }

    async fn respond_with_state(
        &self,
        result: Result<(), SessionError>,
        now: Instant,
    ) -> GameStateResponse {
        if let Err(e) = result {
            return GameStateResponse::from_result(Err(e));
        }
        let snapshot = self.app_context.sessions.snapshot(self.game_id(), now).await;
        GameStateResponse::from_result(snapshot)
    }
}
