use crate::game::errors::GameError;
use crate::game::models::RoundRecord;
use crate::storage::interface::SessionError;
use crate::storage::models::GameSnapshot;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub error: bool,
    pub game_id: String,
    pub game: Option<GameSnapshot>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameActionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameSnapshot>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameActionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameActionError>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameActionError {
    GameNotFound,
    WrongPhase,
    MissingGuess,
    MissingLocation,
    GuessingDisabled,
    NothingToRetry,
    StaleCallback,
}

impl From<SessionError> for GameActionError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::GameNotFound => Self::GameNotFound,
            SessionError::GuessingDisabled => Self::GuessingDisabled,
            SessionError::Game(GameError::WrongPhase { .. }) => Self::WrongPhase,
            SessionError::Game(GameError::MissingGuess) => Self::MissingGuess,
            SessionError::Game(GameError::MissingLocation) => Self::MissingLocation,
            SessionError::Game(GameError::NothingToRetry) => Self::NothingToRetry,
            SessionError::Game(GameError::StaleLookup(_) | GameError::StaleGuess(_)) => {
                Self::StaleCallback
            }
        }
    }
}

impl GameStateResponse {
    pub fn from_result(result: Result<GameSnapshot, SessionError>) -> Self {
        match result {
            Ok(game) => Self {
                error: false,
                error_code: None,
                game: Some(game),
            },
            Err(e) => Self {
                error: true,
                error_code: Some(e.into()),
                game: None,
            },
        }
    }
}
