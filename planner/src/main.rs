//! Pasture Planner - command-line entry point
//!
//! Fetches daily weather history for one property, classifies forage quality
//! per calendar month, and prints the plan with its breeding months.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pasture_planner::{cli::Cli, Config, RunOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout carries only the plan
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pasture_planner=info,shared=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            cli.log_json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!cli.log_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    // Load configuration
    let config = Config::load(&cli)?;
    config.validate()?;

    tracing::info!("Starting Pasture Planner");
    tracing::info!("Environment: {}", config.environment);

    let options = RunOptions {
        today: cli
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        input: cli.input.clone(),
        save_response: cli.save_response.clone(),
    };

    let plan = match pasture_planner::run(&config, &options).await {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!(code = e.code(), "Pasture planning failed: {}", e);
            return Err(e.into());
        }
    };

    pasture_planner::write_output(&config, &plan)?;

    Ok(())
}
