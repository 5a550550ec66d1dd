use crate::scoring::models::{DistanceTier, TimeTier};

/// Distance brackets in meters, closest first.
pub const DEFAULT_DISTANCE_TIERS: [DistanceTier; 6] = [
    DistanceTier { max_meters: 100.0, points: 5000 },
    DistanceTier { max_meters: 1_000.0, points: 3000 },
    DistanceTier { max_meters: 10_000.0, points: 1000 },
    DistanceTier { max_meters: 50_000.0, points: 500 },
    DistanceTier { max_meters: 200_000.0, points: 250 },
    DistanceTier { max_meters: 500_000.0, points: 100 },
];

/// Time brackets in seconds, fastest first.
pub const DEFAULT_TIME_TIERS: [TimeTier; 4] = [
    TimeTier { under_seconds: 10.0, points: 500 },
    TimeTier { under_seconds: 30.0, points: 250 },
    TimeTier { under_seconds: 60.0, points: 100 },
    TimeTier { under_seconds: 90.0, points: 50 },
];
