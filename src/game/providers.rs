use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

/// Identifies one panorama lookup. A resolution carrying any other ticket than the
/// one in flight is stale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupTicket {
    pub id: u64,
    pub round: u32,
}

/// Handed to the map when guessing is armed; guesses must quote it back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessTicket {
    pub round: u32,
}

/// The world map the player clicks on.
///
/// Clicks are reported back through `GameController::place_guess` with the ticket
/// received in `enable_guessing`.
pub trait MapProvider {
    fn enable_guessing(&mut self, ticket: GuessTicket);

    fn disable_guessing(&mut self);

    fn show_result(&mut self, actual: LatLng, guess: LatLng);

    fn clear_round(&mut self);
}

/// Finds locations that have street-level imagery.
///
/// The answer, if it ever comes, is delivered through
/// `GameController::location_found` with the same ticket.
pub trait PanoramaProvider {
    fn find_valid_location(&mut self, ticket: LookupTicket);
}
