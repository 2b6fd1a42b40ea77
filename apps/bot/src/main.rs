use bot::ai::Heuristic;
use bot::api::GameClient;
use bot::config::ApiConfig;
use bot::error::AppError;
use bot::runner::GameRunner;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        // Log and terminate; no partial-state recovery for a dead session.
        error!("session terminated: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = ApiConfig::from_env()?;
    let client = GameClient::new(&config)?;
    let runner = GameRunner::new(client, Box::new(Heuristic::new()));

    let summary = runner.run().await?;
    info!(
        game_id = %summary.game_id,
        turns = summary.turns,
        final_score = summary.final_score,
        final_money = summary.final_money,
        "game finished"
    );
    Ok(())
}
