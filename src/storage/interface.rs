use crate::game::config::GameConfig;
use crate::game::controller::TimerEvent;
use crate::game::errors::GameError;
use crate::game::models::RoundRecord;
use crate::game::providers::LookupTicket;
use crate::geo::models::LatLng;
use crate::locations::resolver::LookupRequest;
use crate::storage::models::GameSnapshot;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

pub trait ISessionStorage: SessionRepo + SessionGameFlowHandler + Clone {}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("no game with such id")]
    GameNotFound,
    #[error("guessing is not armed on the map")]
    GuessingDisabled,
    #[error(transparent)]
    Game(#[from] GameError),
}

pub trait SessionRepo {
    async fn create(&self, config: GameConfig, lookups: UnboundedSender<LookupRequest>) -> String;

    async fn exists(&self, game_id: &str) -> bool;

    async fn snapshot(&self, game_id: &str, now: Instant) -> Result<GameSnapshot, SessionError>;

    async fn remove(&self, game_id: &str) -> bool;

    async fn count(&self) -> usize;

    /// Drops every session nobody has acted on for `max_idle`, returning their ids.
    async fn evict_idle(&self, now: Instant, max_idle: Duration) -> Vec<String>;
}

pub trait SessionGameFlowHandler {
    async fn start_game(&self, game_id: &str, now: Instant) -> Result<(), SessionError>;

    async fn place_guess(&self, game_id: &str, guess: LatLng) -> Result<(), SessionError>;

    async fn submit_guess(&self, game_id: &str, now: Instant)
        -> Result<RoundRecord, SessionError>;

    async fn advance_round(&self, game_id: &str, now: Instant) -> Result<(), SessionError>;

    async fn restart(&self, game_id: &str) -> Result<(), SessionError>;

    async fn retry_lookup(&self, game_id: &str, now: Instant) -> Result<(), SessionError>;

    async fn location_found(
        &self,
        game_id: &str,
        ticket: LookupTicket,
        location: LatLng,
        now: Instant,
    ) -> Result<(), SessionError>;

    async fn tick_all(&self, now: Instant) -> Vec<(String, TimerEvent)>;
}
