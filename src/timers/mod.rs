use crate::game::controller::TimerEvent;
use crate::storage::interface::{SessionGameFlowHandler, SessionRepo};
use crate::storage::sessions::HashMapSessionsStorage;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// Drives the lookup deadlines and round countdowns of every session, and drops
/// sessions that have been idle for `max_idle`.
pub async fn run(sessions: HashMapSessionsStorage, period: Duration, max_idle: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        let now = Instant::now();
        for game_id in sessions.evict_idle(now, max_idle).await {
            tracing::info!(task = "session_evicted", game_id = %game_id);
        }
        for (game_id, event) in sessions.tick_all(now).await {
            match event {
                TimerEvent::LookupTimedOut(ticket) => tracing::info!(
                    task = "timer_fired",
                    game_id = %game_id,
                    kind = "lookup_timed_out",
                    round = ticket.round,
                ),
                TimerEvent::RoundExpired(record) => tracing::info!(
                    task = "timer_fired",
                    game_id = %game_id,
                    kind = "round_expired",
                    round = record.round_index,
                    points = record.points,
                ),
            }
        }
    }
}
