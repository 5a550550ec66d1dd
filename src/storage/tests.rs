use crate::game::config::GameConfig;
use crate::game::controller::TimerEvent;
use crate::game::errors::GameError;
use crate::game::models::GamePhase;
use crate::geo::models::LatLng;
use crate::locations::resolver::LookupRequest;
use crate::scoring::ScoringPolicy;
use crate::storage::interface::{SessionError, SessionGameFlowHandler, SessionRepo};
use crate::storage::sessions::HashMapSessionsStorage;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn point(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng).expect("Test coordinate must be valid.")
}

async fn started_game(
    sessions: &HashMapSessionsStorage,
    config: GameConfig,
    now: Instant,
) -> (String, UnboundedReceiver<LookupRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let game_id = sessions.create(config, tx).await;
    sessions
        .start_game(&game_id, now)
        .await
        .expect("Failed to start the game.");
    (game_id, rx)
}

#[tokio::test]
async fn test_start_sends_a_lookup_request() {
    let sessions = HashMapSessionsStorage::default();
    let now = Instant::now();

    let (game_id, mut lookups) = started_game(&sessions, GameConfig::default(), now).await;

    let request = lookups.try_recv().expect("No lookup request was sent.");
    assert_eq!(request.game_id, game_id);
    assert_eq!(request.ticket.round, 1);
    assert!(sessions.exists(&game_id).await);
}

#[tokio::test]
async fn test_unknown_game() {
    let sessions = HashMapSessionsStorage::default();

    let result = sessions.start_game("nope", Instant::now()).await;

    assert_eq!(result, Err(SessionError::GameNotFound));
    assert!(!sessions.exists("nope").await);
}

#[tokio::test]
async fn test_guess_needs_an_armed_map() {
    let sessions = HashMapSessionsStorage::default();
    let (game_id, _lookups) = started_game(&sessions, GameConfig::default(), Instant::now()).await;

    let result = sessions.place_guess(&game_id, point(1.0, 1.0)).await;

    assert_eq!(result, Err(SessionError::GuessingDisabled));
}

#[tokio::test]
async fn test_round_through_storage() {
    let sessions = HashMapSessionsStorage::default();
    let now = Instant::now();
    let (game_id, mut lookups) = started_game(&sessions, GameConfig::default(), now).await;
    let request = lookups.try_recv().expect("No lookup request was sent.");
    let actual = point(48.8584, 2.2945);

    sessions
        .location_found(&game_id, request.ticket, actual, now)
        .await
        .expect("Failed to resolve the lookup.");
    let armed = sessions
        .snapshot(&game_id, now)
        .await
        .expect("Failed to take a snapshot.");
    assert_eq!(armed.state.phase, GamePhase::AwaitingGuess);
    assert_eq!(armed.state.pending_actual, Some(actual));
    assert_eq!(armed.max_points_per_round, 5000);

    sessions
        .place_guess(&game_id, point(48.8606, 2.3376))
        .await
        .expect("Failed to place a guess.");
    let record = sessions
        .submit_guess(&game_id, now)
        .await
        .expect("Failed to submit.");

    assert_eq!(record.round_index, 1);
    assert_eq!(record.points, 1000);
    let scored = sessions
        .snapshot(&game_id, now)
        .await
        .expect("Failed to take a snapshot.");
    assert_eq!(scored.state.total_score, 1000);
    assert_eq!(scored.map.armed(), None);

    sessions
        .advance_round(&game_id, now)
        .await
        .expect("Failed to advance.");
    let next = lookups.try_recv().expect("No lookup for round two.");
    assert_eq!(next.ticket.round, 2);

    let late = sessions
        .location_found(&game_id, request.ticket, actual, now)
        .await;
    assert_eq!(
        late,
        Err(SessionError::Game(GameError::StaleLookup(request.ticket)))
    );
}

#[tokio::test]
async fn test_tick_all_reports_timeouts() {
    let sessions = HashMapSessionsStorage::default();
    let now = Instant::now();
    let (first, _first_lookups) = started_game(&sessions, GameConfig::default(), now).await;
    let (second, mut second_lookups) = started_game(&sessions, GameConfig::default(), now).await;
    let request = second_lookups.try_recv().expect("No lookup request was sent.");
    sessions
        .location_found(&second, request.ticket, point(0.0, 0.0), now)
        .await
        .expect("Failed to resolve the lookup.");

    let events = sessions.tick_all(now + Duration::from_secs(13)).await;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, first);
    assert!(matches!(events[0].1, TimerEvent::LookupTimedOut(_)));

    sessions
        .retry_lookup(&first, now + Duration::from_secs(14))
        .await
        .expect("Failed to retry.");
    assert_eq!(
        sessions.retry_lookup(&first, now).await,
        Err(SessionError::Game(GameError::NothingToRetry))
    );
}

#[tokio::test]
async fn test_snapshot_reports_seconds_left() {
    let sessions = HashMapSessionsStorage::default();
    let now = Instant::now();
    let config = GameConfig::new(
        2,
        Duration::from_secs(12),
        Some(Duration::from_secs(120)),
        ScoringPolicy::timed(),
    )
    .expect("Failed to build a timed config.");
    let (game_id, mut lookups) = started_game(&sessions, config, now).await;
    let request = lookups.try_recv().expect("No lookup request was sent.");
    sessions
        .location_found(&game_id, request.ticket, point(0.0, 0.0), now)
        .await
        .expect("Failed to resolve the lookup.");

    let snapshot = sessions
        .snapshot(&game_id, now + Duration::from_secs(20))
        .await
        .expect("Failed to take a snapshot.");

    assert_eq!(snapshot.seconds_left, Some(100.0));
    assert_eq!(snapshot.max_points_per_round, 5500);
}

#[tokio::test]
async fn test_restart_and_remove() {
    let sessions = HashMapSessionsStorage::default();
    let now = Instant::now();
    let (game_id, _lookups) = started_game(&sessions, GameConfig::default(), now).await;

    sessions.restart(&game_id).await.expect("Failed to restart.");
    let snapshot = sessions
        .snapshot(&game_id, now)
        .await
        .expect("Failed to take a snapshot.");
    assert_eq!(snapshot.state.phase, GamePhase::NotStarted);

    assert!(sessions.remove(&game_id).await);
    assert!(!sessions.remove(&game_id).await);
}

#[tokio::test]
async fn test_idle_sessions_are_evicted() {
    let sessions = HashMapSessionsStorage::default();
    let (first, _first_lookups) =
        started_game(&sessions, GameConfig::default(), Instant::now()).await;
    let (second, _second_lookups) =
        started_game(&sessions, GameConfig::default(), Instant::now()).await;
    let max_idle = Duration::from_secs(3600);

    let kept = sessions
        .evict_idle(Instant::now() + Duration::from_secs(60), max_idle)
        .await;
    assert!(kept.is_empty());
    assert_eq!(sessions.count().await, 2);

    let mut evicted = sessions
        .evict_idle(Instant::now() + Duration::from_secs(7200), max_idle)
        .await;
    evicted.sort();
    let mut expected = vec![first.clone(), second.clone()];
    expected.sort();

    assert_eq!(evicted, expected);
    assert!(!sessions.exists(&first).await);
    assert_eq!(sessions.count().await, 0);
}
