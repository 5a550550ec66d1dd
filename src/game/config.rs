use crate::cli::Args;
use crate::game::consts::{DEFAULT_LOOKUP_TIMEOUT, DEFAULT_ROUNDS_PER_GAME, MAX_WAIT};
use crate::scoring::{ScoringPolicy, ScoringPolicyError};
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    total_rounds: u32,
    lookup_timeout: Duration,
    round_time_limit: Option<Duration>,
    scoring: ScoringPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    NoRounds,
    #[error("the lookup timeout must be longer than zero")]
    ZeroLookupTimeout,
    #[error("the round time limit must be longer than zero")]
    ZeroTimeLimit,
    #[error(
        "the round time limit ({limit}s) is shorter than the slowest time bonus bracket \
        ({bracket}s), so an expired round would still earn a bonus"
    )]
    TimeLimitBelowBonus { limit: f64, bracket: f64 },
    #[error("the {setting} may be at most {max_secs}s")]
    TooLong {
        setting: &'static str,
        max_secs: u64,
    },
    #[error("{total_rounds} rounds of up to {max_points} points would overflow the total score")]
    ScoreOverflow { total_rounds: u32, max_points: u64 },
    #[error(transparent)]
    Scoring(#[from] ScoringPolicyError),
}

impl GameConfig {
    pub fn new(
        total_rounds: u32,
        lookup_timeout: Duration,
        round_time_limit: Option<Duration>,
        scoring: ScoringPolicy,
    ) -> Result<Self, ConfigError> {
        if total_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if lookup_timeout.is_zero() {
            return Err(ConfigError::ZeroLookupTimeout);
        }
        check_wait("lookup timeout", lookup_timeout)?;
        if let Some(limit) = round_time_limit {
            if limit.is_zero() {
                return Err(ConfigError::ZeroTimeLimit);
            }
            check_wait("round time limit", limit)?;
            if let Some(bracket) = scoring.slowest_bonus_seconds() {
                if limit.as_secs_f64() < bracket {
                    return Err(ConfigError::TimeLimitBelowBonus {
                        limit: limit.as_secs_f64(),
                        bracket,
                    });
                }
            }
        }
        let max_points = scoring.max_points();
        if max_points.checked_mul(u64::from(total_rounds)).is_none() {
            return Err(ConfigError::ScoreOverflow {
                total_rounds,
                max_points,
            });
        }
        Ok(Self {
            total_rounds,
            lookup_timeout,
            round_time_limit,
            scoring,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let round_time_limit = args.round_time_limit_secs.map(Duration::from_secs);
        let scoring = match (&args.scoring_policy, round_time_limit) {
            (Some(path), _) => ScoringPolicy::from_file(path)?,
            (None, Some(_)) => ScoringPolicy::timed(),
            (None, None) => ScoringPolicy::classic(),
        };
        Self::new(
            args.rounds_per_game,
            Duration::from_secs(args.lookup_timeout_secs),
            round_time_limit,
            scoring,
        )
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    pub fn round_time_limit(&self) -> Option<Duration> {
        self.round_time_limit
    }

    pub fn scoring(&self) -> &ScoringPolicy {
        &self.scoring
    }

    /// Timed games record how long each guess took.
    pub fn is_timed(&self) -> bool {
        self.round_time_limit.is_some() || self.scoring.has_time_bonus()
    }
}

fn check_wait(setting: &'static str, wait: Duration) -> Result<(), ConfigError> {
    if wait > MAX_WAIT {
        return Err(ConfigError::TooLong {
            setting,
            max_secs: MAX_WAIT.as_secs(),
        });
    }
    Ok(())
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_ROUNDS_PER_GAME,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            round_time_limit: None,
            scoring: ScoringPolicy::classic(),
        }
    }
}
