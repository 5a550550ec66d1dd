use consts::{DEFAULT_DISTANCE_TIERS, DEFAULT_TIME_TIERS};
use models::{DistanceTier, RoundScore, TimeTier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Turns a round's distance (and, for timed games, elapsed time) into points.
///
/// Both tables are validated on construction: thresholds strictly increase and awards
/// never increase, so a closer or faster guess can never score less.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawScoringPolicy")]
pub struct ScoringPolicy {
    distance_tiers: Vec<DistanceTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_bonus: Option<Vec<TimeTier>>,
}

#[derive(Debug, Error)]
pub enum ScoringPolicyError {
    #[error("a scoring policy needs at least one distance tier")]
    NoDistanceTiers,
    #[error("a time bonus table needs at least one tier")]
    NoTimeTiers,
    #[error("tier threshold {0} must be a finite non-negative number")]
    InvalidThreshold(f64),
    #[error("tier thresholds must strictly increase ({previous} is followed by {next})")]
    UnorderedThresholds { previous: f64, next: f64 },
    #[error("a farther or slower tier awards more points ({previous} is followed by {next})")]
    IncreasingPoints { previous: u64, next: u64 },
    #[error("the best distance tier ({distance}) plus the best time bonus ({bonus}) overflows")]
    PointsOverflow { distance: u64, bonus: u64 },
    #[error("failed to read the scoring policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse the scoring policy file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ScoringPolicy {
    pub fn new(
        distance_tiers: Vec<DistanceTier>,
        time_bonus: Option<Vec<TimeTier>>,
    ) -> Result<Self, ScoringPolicyError> {
        if distance_tiers.is_empty() {
            return Err(ScoringPolicyError::NoDistanceTiers);
        }
        validate_tiers(distance_tiers.iter().map(|t| (t.max_meters, t.points)))?;
        if let Some(time_tiers) = &time_bonus {
            if time_tiers.is_empty() {
                return Err(ScoringPolicyError::NoTimeTiers);
            }
            validate_tiers(time_tiers.iter().map(|t| (t.under_seconds, t.points)))?;
            let distance = distance_tiers[0].points;
            let bonus = time_tiers[0].points;
            if distance.checked_add(bonus).is_none() {
                return Err(ScoringPolicyError::PointsOverflow { distance, bonus });
            }
        }
        Ok(Self {
            distance_tiers,
            time_bonus,
        })
    }

    /// Distance tiers only.
    pub fn classic() -> Self {
        Self {
            distance_tiers: DEFAULT_DISTANCE_TIERS.to_vec(),
            time_bonus: None,
        }
    }

    /// Distance tiers plus the default time bonus.
    pub fn timed() -> Self {
        Self {
            distance_tiers: DEFAULT_DISTANCE_TIERS.to_vec(),
            time_bonus: Some(DEFAULT_TIME_TIERS.to_vec()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ScoringPolicyError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn has_time_bonus(&self) -> bool {
        self.time_bonus.is_some()
    }

    /// Upper bound of the slowest bonus bracket, if there is a bonus at all.
    pub fn slowest_bonus_seconds(&self) -> Option<f64> {
        self.time_bonus
            .as_ref()
            .and_then(|tiers| tiers.last())
            .map(|tier| tier.under_seconds)
    }

    pub fn max_points(&self) -> u64 {
        let distance = self.distance_tiers.first().map_or(0, |t| t.points);
        let bonus = self
            .time_bonus
            .as_ref()
            .and_then(|tiers| tiers.first())
            .map_or(0, |t| t.points);
        distance + bonus
    }

    pub fn distance_points(&self, distance_meters: f64) -> u64 {
        let meters = clamp_non_negative(distance_meters);
        self.distance_tiers
            .iter()
            .find(|tier| meters <= tier.max_meters)
            .map_or(0, |tier| tier.points)
    }

    pub fn time_bonus(&self, elapsed_seconds: f64) -> u64 {
        let Some(tiers) = &self.time_bonus else {
            return 0;
        };
        let seconds = clamp_non_negative(elapsed_seconds);
        tiers
            .iter()
            .find(|tier| seconds < tier.under_seconds)
            .map_or(0, |tier| tier.points)
    }

    pub fn score_round(&self, distance_meters: f64, elapsed_seconds: Option<f64>) -> RoundScore {
        let distance_points = self.distance_points(distance_meters);
        let time_bonus = elapsed_seconds.map_or(0, |seconds| self.time_bonus(seconds));
        RoundScore {
            distance_points,
            time_bonus,
            points: distance_points + time_bonus,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::classic()
    }
}

// NaN and negatives count as zero; +inf is left alone and falls past every tier.
fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0)
}

fn validate_tiers(
    mut tiers: impl Iterator<Item = (f64, u64)>,
) -> Result<(), ScoringPolicyError> {
    let Some((mut previous_threshold, mut previous_points)) = tiers.next() else {
        return Ok(());
    };
    check_threshold(previous_threshold)?;
    for (threshold, points) in tiers {
        check_threshold(threshold)?;
        if threshold <= previous_threshold {
            return Err(ScoringPolicyError::UnorderedThresholds {
                previous: previous_threshold,
                next: threshold,
            });
        }
        if points > previous_points {
            return Err(ScoringPolicyError::IncreasingPoints {
                previous: previous_points,
                next: points,
            });
        }
        previous_threshold = threshold;
        previous_points = points;
    }
    Ok(())
}

fn check_threshold(threshold: f64) -> Result<(), ScoringPolicyError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ScoringPolicyError::InvalidThreshold(threshold));
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScoringPolicy {
    distance_tiers: Vec<DistanceTier>,
    #[serde(default)]
    time_bonus: Option<Vec<TimeTier>>,
}

impl TryFrom<RawScoringPolicy> for ScoringPolicy {
    type Error = ScoringPolicyError;

    fn try_from(raw: RawScoringPolicy) -> Result<Self, Self::Error> {
        ScoringPolicy::new(raw.distance_tiers, raw.time_bonus)
    }
}
