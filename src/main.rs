use anyhow::Context;
use clap::Parser;
use std::time::Duration;

mod app_context;
mod cli;
mod game;
mod games;
mod geo;
mod health;
mod http;
mod locations;
mod logging;
mod scoring;
mod storage;
mod timers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init();
    let config = game::config::GameConfig::from_args(&args)
        .context("Invalid game configuration.")?;
    let location_pool =
        locations::LocationPool::init(&args).context("Failed to load the locations.")?;
    tracing::info!(
        rounds_per_game = config.total_rounds(),
        timed = config.is_timed(),
        "Initialized game configuration."
    );

    let (app_context, lookups) = app_context::init(config);
    tokio::spawn(locations::resolver::run(
        location_pool,
        app_context.sessions.clone(),
        lookups,
    ));
    tokio::spawn(timers::run(
        app_context.sessions.clone(),
        Duration::from_millis(args.tick_interval_ms.max(1)),
        Duration::from_secs(args.session_idle_secs.max(1)),
    ));

    let router = http::router::new(&args, app_context).context("Invalid allowed origin.")?;
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind {}.", args.listen_address))?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router).await?;
    Ok(())
}
