use serde::{Deserialize, Serialize};

/// Awards `points` to any guess at most `max_meters` away.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceTier {
    pub max_meters: f64,
    pub points: u64,
}

/// Awards `points` to any guess submitted in strictly less than `under_seconds`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTier {
    pub under_seconds: f64,
    pub points: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub distance_points: u64,
    pub time_bonus: u64,
    pub points: u64,
}
