use std::time::Duration;

pub const DEFAULT_ROUNDS_PER_GAME: u32 = 5;
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(12);
/// Longest lookup timeout or round time limit a game accepts.
pub const MAX_WAIT: Duration = Duration::from_secs(7 * 24 * 60 * 60);
