use crate::game::models::GamePhase;
use crate::game::providers::LookupTicket;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("`{action}` is not allowed while the game is {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },
    #[error("no guess has been placed for this round")]
    MissingGuess,
    #[error("the location of this round is not known yet")]
    MissingLocation,
    #[error("lookup {0:?} is not the one in flight")]
    StaleLookup(LookupTicket),
    #[error("guessing is not armed for round {0}")]
    StaleGuess(u32),
    #[error("there is no timed out lookup to retry")]
    NothingToRetry,
}
