use crate::game::providers::{GuessTicket, MapProvider};
use crate::geo::models::LatLng;
use serde::Serialize;

/// What the front end should currently draw on the guessing map.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    #[serde(skip)]
    armed: Option<GuessTicket>,
    guessing_enabled: bool,
    guess_marker: Option<LatLng>,
    actual_marker: Option<LatLng>,
    /// Drawn from the guess to the actual location.
    result_line: Option<[LatLng; 2]>,
}

impl MapView {
    pub fn armed(&self) -> Option<GuessTicket> {
        self.armed
    }

    pub fn place_guess_marker(&mut self, guess: LatLng) {
        self.guess_marker = Some(guess);
    }
}

impl MapProvider for MapView {
    fn enable_guessing(&mut self, ticket: GuessTicket) {
        self.armed = Some(ticket);
        self.guessing_enabled = true;
    }

    fn disable_guessing(&mut self) {
        self.armed = None;
        self.guessing_enabled = false;
    }

    fn show_result(&mut self, actual: LatLng, guess: LatLng) {
        self.actual_marker = Some(actual);
        self.guess_marker = Some(guess);
        self.result_line = Some([guess, actual]);
    }

    fn clear_round(&mut self) {
        self.guess_marker = None;
        self.actual_marker = None;
        self.result_line = None;
    }
}
