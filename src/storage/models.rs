use crate::game::models::GameState;
use crate::storage::map_view::MapView;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: String,
    pub state: GameState,
    pub map: MapView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_left: Option<f64>,
    pub max_points_per_round: u64,
}
