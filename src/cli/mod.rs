use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Newline-delimited JSON file of `{"lat": .., "lng": ..}` points with imagery.
    /// Without it, locations are sampled anywhere on the globe.
    #[arg(long)]
    pub locations: Option<PathBuf>,
    #[arg(long)]
    #[arg(default_value_t = 5)]
    pub rounds_per_game: u32,
    #[arg(long)]
    #[arg(default_value_t = 12)]
    pub lookup_timeout_secs: u64,
    #[arg(long)]
    pub round_time_limit_secs: Option<u64>,
    /// JSON file with `distanceTiers` and an optional `timeBonus` table.
    #[arg(long)]
    pub scoring_policy: Option<PathBuf>,
    #[arg(long)]
    #[arg(default_value_t = 250)]
    pub tick_interval_ms: u64,
    /// Sessions nobody has acted on for this long are dropped.
    #[arg(long)]
    #[arg(default_value_t = 3600)]
    pub session_idle_secs: u64,
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
}
