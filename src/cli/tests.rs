use crate::cli::Args;
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed co construct fake listen address."),
        locations: None,
        rounds_per_game: 3,
        lookup_timeout_secs: 12,
        round_time_limit_secs: None,
        scoring_policy: None,
        tick_interval_ms: 250,
        session_idle_secs: 3600,
        allowed_origins: vec![String::from("http://localhost:3000")],
    }
}

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["world-explorer-server"]).expect("Failed to parse no args.");

    assert_eq!(args.listen_address.port(), 3030);
    assert_eq!(args.rounds_per_game, 5);
    assert_eq!(args.lookup_timeout_secs, 12);
    assert_eq!(args.round_time_limit_secs, None);
    assert_eq!(args.locations, None);
    assert_eq!(args.session_idle_secs, 3600);
    assert_eq!(args.allowed_origins.len(), 2);
}

#[test]
fn test_overrides() {
    let args = Args::try_parse_from([
        "world-explorer-server",
        "--rounds-per-game",
        "10",
        "--round-time-limit-secs",
        "120",
        "--locations",
        "locations.example.ndjson",
        "--allowed-origin",
        "https://example.org",
    ])
    .expect("Failed to parse overrides.");

    assert_eq!(args.rounds_per_game, 10);
    assert_eq!(args.round_time_limit_secs, Some(120));
    assert_eq!(
        args.locations.as_deref(),
        Some(std::path::Path::new("locations.example.ndjson"))
    );
    assert_eq!(args.allowed_origins, vec![String::from("https://example.org")]);
}
