use crate::geo::models::LatLng;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "name")]
pub enum GamePhase {
    NotStarted,
    /// Waiting for the panorama lookup. `timed_out` is set once the lookup is
    /// abandoned, until the player retries.
    AwaitingLocation {
        #[serde(rename = "timedOut")]
        timed_out: bool,
    },
    AwaitingGuess,
    Scored,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub round_index: u32,
    pub actual: LatLng,
    pub guess: LatLng,
    pub distance_meters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
    pub distance_points: u64,
    pub time_bonus: u64,
    pub points: u64,
    /// The countdown ran out and the round was submitted automatically.
    pub expired: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub phase: GamePhase,
    pub total_rounds: u32,
    pub current_round_index: u32,
    pub total_score: u64,
    pub rounds: Vec<RoundRecord>,
    pub pending_actual: Option<LatLng>,
    pub pending_guess: Option<LatLng>,
}

impl GameState {
    pub fn new(total_rounds: u32) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            total_rounds,
            current_round_index: 0,
            total_score: 0,
            rounds: Vec::with_capacity(total_rounds as usize),
            pending_actual: None,
            pending_guess: None,
        }
    }

    pub fn is_last_round(&self) -> bool {
        self.current_round_index >= self.total_rounds
    }

    pub(super) fn record(&mut self, record: RoundRecord) {
        self.total_score += record.points;
        self.rounds.push(record);
        self.pending_actual = None;
        self.pending_guess = None;
    }
}
