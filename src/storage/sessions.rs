use crate::game::config::GameConfig;
use crate::game::controller::{GameController, TimerEvent};
use crate::game::models::RoundRecord;
use crate::game::providers::LookupTicket;
use crate::geo::models::LatLng;
use crate::locations::resolver::LookupRequest;
use crate::storage::interface::{
    ISessionStorage, SessionError, SessionGameFlowHandler, SessionRepo,
};
use crate::storage::map_view::MapView;
use crate::storage::models::GameSnapshot;
use crate::storage::panorama::ChannelPanoramaProvider;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::RwLock;
use uuid::Uuid;

pub type Session = GameController<MapView, ChannelPanoramaProvider>;

struct StoredSession {
    session: Session,
    last_active: Instant,
}

#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, StoredSession>>>,
}

impl HashMapSessionsStorage {
    async fn with_session<T>(
        &self,
        game_id: &str,
        action: impl FnOnce(&mut Session) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut storage_guard = self.storage.write().await;
        let stored = storage_guard
            .get_mut(game_id)
            .ok_or(SessionError::GameNotFound)?;
        stored.last_active = Instant::now();
        action(&mut stored.session)
    }
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self, config: GameConfig, lookups: UnboundedSender<LookupRequest>) -> String {
        let game_id = Uuid::new_v4().to_string();
        let panorama = ChannelPanoramaProvider::new(game_id.clone(), lookups);
        let session = GameController::new(config, MapView::default(), panorama);
        let stored = StoredSession {
            session,
            last_active: Instant::now(),
        };
        self.storage.write().await.insert(game_id.clone(), stored);
        game_id
    }

    async fn exists(&self, game_id: &str) -> bool {
        self.storage.read().await.contains_key(game_id)
    }

    async fn snapshot(&self, game_id: &str, now: Instant) -> Result<GameSnapshot, SessionError> {
        let storage_guard = self.storage.read().await;
        let session = &storage_guard
            .get(game_id)
            .ok_or(SessionError::GameNotFound)?
            .session;
        Ok(GameSnapshot {
            game_id: game_id.to_string(),
            state: session.state().clone(),
            map: session.map().clone(),
            seconds_left: session.time_left(now).map(|left| left.as_secs_f64()),
            max_points_per_round: session.config().scoring().max_points(),
        })
    }

    async fn remove(&self, game_id: &str) -> bool {
        self.storage.write().await.remove(game_id).is_some()
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    async fn evict_idle(&self, now: Instant, max_idle: Duration) -> Vec<String> {
        let mut storage_guard = self.storage.write().await;
        let mut evicted = Vec::new();
        storage_guard.retain(|game_id, stored| {
            let idle = now.saturating_duration_since(stored.last_active) >= max_idle;
            if idle {
                evicted.push(game_id.clone());
            }
            !idle
        });
        evicted
    }
}

impl SessionGameFlowHandler for HashMapSessionsStorage {
    async fn start_game(&self, game_id: &str, now: Instant) -> Result<(), SessionError> {
        self.with_session(game_id, |session| Ok(session.start_game(now)?))
            .await
    }

    async fn place_guess(&self, game_id: &str, guess: LatLng) -> Result<(), SessionError> {
        self.with_session(game_id, |session| {
            let ticket = session.map().armed().ok_or(SessionError::GuessingDisabled)?;
            session.place_guess(ticket, guess)?;
            session.map_mut().place_guess_marker(guess);
            Ok(())
        })
        .await
    }

    async fn submit_guess(
        &self,
        game_id: &str,
        now: Instant,
    ) -> Result<RoundRecord, SessionError> {
        self.with_session(game_id, |session| Ok(session.submit_guess(now)?.clone()))
            .await
    }

    async fn advance_round(&self, game_id: &str, now: Instant) -> Result<(), SessionError> {
        self.with_session(game_id, |session| Ok(session.advance_round(now)?))
            .await
    }

    async fn restart(&self, game_id: &str) -> Result<(), SessionError> {
        self.with_session(game_id, |session| {
            session.restart();
            Ok(())
        })
        .await
    }

    async fn retry_lookup(&self, game_id: &str, now: Instant) -> Result<(), SessionError> {
        self.with_session(game_id, |session| Ok(session.retry_lookup(now)?))
            .await
    }

    async fn location_found(
        &self,
        game_id: &str,
        ticket: LookupTicket,
        location: LatLng,
        now: Instant,
    ) -> Result<(), SessionError> {
        self.with_session(game_id, |session| {
            Ok(session.location_found(ticket, location, now)?)
        })
        .await
    }

    async fn tick_all(&self, now: Instant) -> Vec<(String, TimerEvent)> {
        let mut storage_guard = self.storage.write().await;
        storage_guard
            .iter_mut()
            .filter_map(|(game_id, stored)| {
                stored.session.tick(now).map(|event| (game_id.clone(), event))
            })
            .collect()
    }
}
