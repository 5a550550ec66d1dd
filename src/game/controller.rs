use crate::game::config::GameConfig;
use crate::game::errors::GameError;
use crate::game::models::{GamePhase, GameState, RoundRecord};
use crate::game::providers::{GuessTicket, LookupTicket, MapProvider, PanoramaProvider};
use crate::geo::{self, models::LatLng};
use std::time::{Duration, Instant};

/// Something a deadline made happen during `GameController::tick`.
#[derive(Clone, Debug, PartialEq)]
pub enum TimerEvent {
    LookupTimedOut(LookupTicket),
    RoundExpired(RoundRecord),
}

#[derive(Copy, Clone, Debug)]
struct PendingLookup {
    ticket: LookupTicket,
    deadline: Option<Instant>,
}

#[derive(Copy, Clone, Debug)]
struct Countdown {
    started_at: Instant,
    deadline: Option<Instant>,
}

/// Sequences the rounds of one playthrough.
///
/// Every transition is a plain method call. Collaborators answer asynchronously by
/// calling `location_found` and `place_guess` with the ticket they were given, and
/// anything quoting an outdated ticket is rejected without touching the state.
pub struct GameController<M, P> {
    config: GameConfig,
    state: GameState,
    map: M,
    panorama: P,
    next_lookup_id: u64,
    lookup: Option<PendingLookup>,
    countdown: Option<Countdown>,
}

impl<M, P> GameController<M, P>
where
    M: MapProvider,
    P: PanoramaProvider,
{
    pub fn new(config: GameConfig, map: M, panorama: P) -> Self {
        let state = GameState::new(config.total_rounds());
        Self {
            config,
            state,
            map,
            panorama,
            next_lookup_id: 1,
            lookup: None,
            countdown: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// For decorations that don't affect the game, like the marker under the cursor.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn panorama(&self) -> &P {
        &self.panorama
    }

    /// Time left to guess in the current round, if it has a countdown.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        if self.state.phase != GamePhase::AwaitingGuess {
            return None;
        }
        self.countdown
            .and_then(|countdown| countdown.deadline)
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn start_game(&mut self, now: Instant) -> Result<(), GameError> {
        if self.state.phase != GamePhase::NotStarted {
            return Err(self.wrong_phase("start_game"));
        }
        self.reset();
        tracing::info!(
            task = "game_started",
            total_rounds = self.state.total_rounds,
        );
        self.begin_round(now);
        Ok(())
    }

    pub fn location_found(
        &mut self,
        ticket: LookupTicket,
        location: LatLng,
        now: Instant,
    ) -> Result<(), GameError> {
        let in_flight = matches!(self.state.phase, GamePhase::AwaitingLocation { .. })
            && self.lookup.is_some_and(|lookup| lookup.ticket == ticket);
        if !in_flight {
            tracing::debug!(
                task = "stale_lookup",
                lookup_id = ticket.id,
                round = ticket.round,
            );
            return Err(GameError::StaleLookup(ticket));
        }
        self.lookup = None;
        self.state.pending_actual = Some(location);
        self.state.phase = GamePhase::AwaitingGuess;
        if self.config.is_timed() {
            self.countdown = Some(Countdown {
                started_at: now,
                deadline: self
                    .config
                    .round_time_limit()
                    .and_then(|limit| now.checked_add(limit)),
            });
        }
        self.map.enable_guessing(GuessTicket {
            round: self.state.current_round_index,
        });
        Ok(())
    }

    pub fn place_guess(&mut self, ticket: GuessTicket, guess: LatLng) -> Result<(), GameError> {
        if self.state.phase != GamePhase::AwaitingGuess
            || ticket.round != self.state.current_round_index
        {
            tracing::debug!(task = "stale_guess", round = ticket.round);
            return Err(GameError::StaleGuess(ticket.round));
        }
        self.state.pending_guess = Some(guess);
        Ok(())
    }

    pub fn submit_guess(&mut self, now: Instant) -> Result<&RoundRecord, GameError> {
        if self.state.phase != GamePhase::AwaitingGuess {
            return Err(self.wrong_phase("submit_guess"));
        }
        let actual = self.state.pending_actual.ok_or(GameError::MissingLocation)?;
        let guess = self.state.pending_guess.ok_or(GameError::MissingGuess)?;
        let elapsed = self
            .countdown
            .map(|countdown| now.saturating_duration_since(countdown.started_at));
        Ok(self.score_round(actual, guess, elapsed, false))
    }

    pub fn advance_round(&mut self, now: Instant) -> Result<(), GameError> {
        if self.state.phase != GamePhase::Scored {
            return Err(self.wrong_phase("advance_round"));
        }
        if self.state.is_last_round() {
            self.state.phase = GamePhase::Finished;
            tracing::info!(
                task = "game_finished",
                total_score = self.state.total_score,
                rounds = self.state.rounds.len(),
            );
        } else {
            self.begin_round(now);
        }
        Ok(())
    }

    /// Abandons whatever is in progress. Nothing pending is ever scored.
    pub fn restart(&mut self) {
        self.reset();
        self.map.disable_guessing();
        self.map.clear_round();
        tracing::info!(task = "game_restarted");
    }

    pub fn retry_lookup(&mut self, now: Instant) -> Result<(), GameError> {
        match self.state.phase {
            GamePhase::AwaitingLocation { timed_out: true } => {
                self.request_location(now);
                Ok(())
            }
            _ => Err(GameError::NothingToRetry),
        }
    }

    /// Fires whichever deadline has passed. At most one deadline is live at a time.
    pub fn tick(&mut self, now: Instant) -> Option<TimerEvent> {
        match self.state.phase {
            GamePhase::AwaitingLocation { timed_out: false } => {
                let lookup = self.lookup?;
                if now < lookup.deadline? {
                    return None;
                }
                self.lookup = None;
                self.state.phase = GamePhase::AwaitingLocation { timed_out: true };
                tracing::warn!(
                    task = "lookup_timed_out",
                    lookup_id = lookup.ticket.id,
                    round = lookup.ticket.round,
                );
                Some(TimerEvent::LookupTimedOut(lookup.ticket))
            }
            GamePhase::AwaitingGuess => {
                let countdown = self.countdown?;
                let deadline = countdown.deadline?;
                if now < deadline {
                    return None;
                }
                let actual = self.state.pending_actual?;
                // Without a guess the player gets the far side of the planet.
                let guess = self.state.pending_guess.unwrap_or_else(|| actual.antipode());
                let elapsed = deadline.saturating_duration_since(countdown.started_at);
                let record = self.score_round(actual, guess, Some(elapsed), true).clone();
                Some(TimerEvent::RoundExpired(record))
            }
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.state = GameState::new(self.config.total_rounds());
        self.lookup = None;
        self.countdown = None;
    }

    fn begin_round(&mut self, now: Instant) {
        self.state.current_round_index += 1;
        self.state.pending_actual = None;
        self.state.pending_guess = None;
        self.countdown = None;
        self.map.clear_round();
        tracing::info!(
            task = "round_started",
            round = self.state.current_round_index,
            total_rounds = self.state.total_rounds,
        );
        self.request_location(now);
    }

    fn request_location(&mut self, now: Instant) {
        let ticket = LookupTicket {
            id: self.next_lookup_id,
            round: self.state.current_round_index,
        };
        self.next_lookup_id += 1;
        self.lookup = Some(PendingLookup {
            ticket,
            deadline: now.checked_add(self.config.lookup_timeout()),
        });
        self.state.phase = GamePhase::AwaitingLocation { timed_out: false };
        self.panorama.find_valid_location(ticket);
    }

    fn score_round(
        &mut self,
        actual: LatLng,
        guess: LatLng,
        elapsed: Option<Duration>,
        expired: bool,
    ) -> &RoundRecord {
        let distance_meters = geo::distance(actual, guess);
        let elapsed_seconds = elapsed.map(|elapsed| elapsed.as_secs_f64());
        let score = self
            .config
            .scoring()
            .score_round(distance_meters, elapsed_seconds);
        let record = RoundRecord {
            round_index: self.state.current_round_index,
            actual,
            guess,
            distance_meters,
            elapsed_seconds,
            distance_points: score.distance_points,
            time_bonus: score.time_bonus,
            points: score.points,
            expired,
        };
        tracing::info!(
            task = "round_scored",
            round = record.round_index,
            distance_m = record.distance_meters,
            points = record.points,
            expired,
        );
        self.state.record(record);
        self.state.phase = GamePhase::Scored;
        self.countdown = None;
        self.map.disable_guessing();
        self.map.show_result(actual, guess);
        &self.state.rounds[self.state.rounds.len() - 1]
    }

    fn wrong_phase(&self, action: &'static str) -> GameError {
        GameError::WrongPhase {
            action,
            phase: self.state.phase,
        }
    }
}
