use crate::scoring::models::{DistanceTier, RoundScore, TimeTier};
use crate::scoring::{ScoringPolicy, ScoringPolicyError};

#[test]
fn test_classic_tier_boundaries() {
    let policy = ScoringPolicy::classic();

    let cases = [
        (0.0, 5000),
        (100.0, 5000),
        (100.1, 3000),
        (1_000.0, 3000),
        (9_999.0, 1000),
        (50_000.0, 500),
        (150_000.0, 250),
        (500_000.0, 100),
        (500_000.5, 0),
        (20_000_000.0, 0),
    ];
    for (meters, expected) in cases {
        assert_eq!(policy.distance_points(meters), expected, "at {meters} m");
    }
}

#[test]
fn test_exact_guess_gets_the_top_tier() {
    let policy = ScoringPolicy::classic();

    let score = policy.score_round(0.0, None);

    assert_eq!(score.points, 5000);
    assert_eq!(score.points, policy.max_points());
}

#[test]
fn test_scoring_never_increases_with_distance() {
    let policy = ScoringPolicy::classic();
    let mut previous = policy.distance_points(0.0);
    let mut meters = 0.0;
    while meters < 1_000_000.0 {
        let points = policy.distance_points(meters);
        assert!(points <= previous, "{points} > {previous} at {meters} m");
        previous = points;
        meters += 250.0;
    }
}

#[test]
fn test_malformed_distance_never_goes_negative() {
    let policy = ScoringPolicy::classic();

    assert_eq!(policy.distance_points(-5.0), 5000);
    assert_eq!(policy.distance_points(f64::NEG_INFINITY), 5000);
    assert_eq!(policy.distance_points(f64::NAN), 5000);
    assert_eq!(policy.distance_points(f64::INFINITY), 0);
}

#[test]
fn test_untimed_round_has_no_bonus() {
    let policy = ScoringPolicy::timed();

    let score = policy.score_round(5_000.0, None);

    assert_eq!(
        score,
        RoundScore {
            distance_points: 1000,
            time_bonus: 0,
            points: 1000,
        }
    );
}

#[test]
fn test_time_bonus_adds_to_distance_points() {
    let policy = ScoringPolicy::timed();

    assert_eq!(policy.score_round(5_000.0, Some(3.0)).points, 1500);
    assert_eq!(policy.score_round(5_000.0, Some(10.0)).points, 1250);
    assert_eq!(policy.score_round(5_000.0, Some(89.9)).points, 1050);
    assert_eq!(policy.score_round(5_000.0, Some(90.0)).points, 1000);
}

#[test]
fn test_time_bonus_extremes() {
    let policy = ScoringPolicy::timed();

    assert_eq!(policy.time_bonus(0.0), 500);
    assert_eq!(policy.time_bonus(-2.0), 500);
    assert_eq!(policy.time_bonus(f64::NAN), 500);
    assert_eq!(policy.time_bonus(f64::INFINITY), 0);
    assert_eq!(ScoringPolicy::classic().time_bonus(0.0), 0);
}

#[test]
fn test_rejects_empty_distance_table() {
    let result = ScoringPolicy::new(vec![], None);

    assert!(matches!(result, Err(ScoringPolicyError::NoDistanceTiers)));
}

#[test]
fn test_rejects_unordered_thresholds() {
    let result = ScoringPolicy::new(
        vec![
            DistanceTier { max_meters: 1_000.0, points: 100 },
            DistanceTier { max_meters: 1_000.0, points: 50 },
        ],
        None,
    );

    assert!(matches!(
        result,
        Err(ScoringPolicyError::UnorderedThresholds { .. })
    ));
}

#[test]
fn test_rejects_farther_tier_worth_more() {
    let result = ScoringPolicy::new(
        vec![
            DistanceTier { max_meters: 100.0, points: 100 },
            DistanceTier { max_meters: 1_000.0, points: 200 },
        ],
        None,
    );

    assert!(matches!(
        result,
        Err(ScoringPolicyError::IncreasingPoints { previous: 100, next: 200 })
    ));
}

#[test]
fn test_rejects_bad_time_table() {
    let empty = ScoringPolicy::new(vec![DistanceTier { max_meters: 1.0, points: 1 }], Some(vec![]));
    assert!(matches!(empty, Err(ScoringPolicyError::NoTimeTiers)));

    let negative = ScoringPolicy::new(
        vec![DistanceTier { max_meters: 1.0, points: 1 }],
        Some(vec![TimeTier { under_seconds: -1.0, points: 10 }]),
    );
    assert!(matches!(negative, Err(ScoringPolicyError::InvalidThreshold(_))));
}

#[test]
fn test_rejects_points_that_overflow() {
    let raw = r#"{
        "distanceTiers": [{"maxMeters": 100, "points": 18446744073709551615}],
        "timeBonus": [{"underSeconds": 10, "points": 1}]
    }"#;

    assert!(serde_json::from_str::<ScoringPolicy>(raw).is_err());
    assert!(matches!(
        ScoringPolicy::new(
            vec![DistanceTier { max_meters: 100.0, points: u64::MAX }],
            Some(vec![TimeTier { under_seconds: 10.0, points: 1 }]),
        ),
        Err(ScoringPolicyError::PointsOverflow { bonus: 1, .. })
    ));

    let untimed = ScoringPolicy::new(vec![DistanceTier { max_meters: 100.0, points: u64::MAX }], None)
        .expect("Without a bonus nothing is added.");
    assert_eq!(untimed.score_round(0.0, Some(1.0)).points, u64::MAX);
}

#[test]
fn test_policy_from_json() {
    let raw = r#"{
        "distanceTiers": [
            {"maxMeters": 1000, "points": 2000},
            {"maxMeters": 100000, "points": 500}
        ],
        "timeBonus": [{"underSeconds": 20, "points": 300}]
    }"#;

    let policy: ScoringPolicy =
        serde_json::from_str(raw).expect("Failed to parse a valid scoring policy.");

    assert_eq!(policy.score_round(50_000.0, Some(5.0)).points, 800);
    assert_eq!(policy.slowest_bonus_seconds(), Some(20.0));
}

#[test]
fn test_invalid_policy_json_is_rejected() {
    let raw = r#"{"distanceTiers": [
        {"maxMeters": 1000, "points": 10},
        {"maxMeters": 10, "points": 5}
    ]}"#;

    assert!(serde_json::from_str::<ScoringPolicy>(raw).is_err());
}
