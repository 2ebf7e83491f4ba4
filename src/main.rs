mod bot;
mod config;
mod greeter;
mod keyboard;
mod platform;
mod scheduler;
mod stats;
mod stylize;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bot::AppState;
use crate::config::Config;
use crate::scheduler::Scheduler;
use crate::stats::JoinStats;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,autoaccept_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    info!("Configuration loaded successfully");
    info!(
        "  Heartbeat: {}",
        if config.heartbeat.enabled {
            config.heartbeat.cron.as_str()
        } else {
            "disabled"
        }
    );

    let stats = Arc::new(JoinStats::new());

    let mut scheduler = Scheduler::new().await?;
    scheduler::tasks::register_heartbeat(&scheduler, &config.heartbeat, stats.clone()).await?;
    scheduler.start().await?;

    let bot = Bot::new(&config.telegram.bot_token);
    let state = Arc::new(AppState::new(&config, stats.clone()));

    info!("Bot is starting...");
    bot::run(bot, state).await?;

    scheduler.shutdown().await?;
    info!("Bot stopped: {}", stats.snapshot());

    Ok(())
}
