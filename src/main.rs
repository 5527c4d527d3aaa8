mod bot;
mod config;
mod data;
mod error;
mod extension;
mod locale;
mod model;
mod scheduler;
mod service;
mod startup;

use crate::{config::Config, error::AppError, service::premium::PremiumCache};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let premium = PremiumCache::new(db.clone());
    if let Err(e) = premium.refresh().await {
        tracing::error!("Failed to load premium sets: {}", e);
    }

    let _scheduler =
        scheduler::premium_refresh::start_scheduler(&config.premium_refresh_cron, premium.clone())
            .await?;

    bot::start::start_bot(config, db, premium).await
}
