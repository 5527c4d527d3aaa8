use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Context, Ready};

use crate::{
    config::Config,
    service::premium::PremiumCache,
    startup::{ensure_data_dir, ensure_schema},
};

/// Handles the ready event when the bot connects to Discord.
///
/// Re-checks the data directory and schema, which is idempotent and covers a data directory
/// removed while the process was running. Then reloads the premium sets from the store and
/// sets the presence. Each step logs its own failure and the remaining steps still run.
pub async fn handle_ready(
    db: &DatabaseConnection,
    premium: &PremiumCache,
    config: &Config,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    if let Err(e) = ensure_data_dir(&config.data_dir).await {
        tracing::error!("Failed to ensure data directory {:?}: {}", config.data_dir, e);
    }

    if let Err(e) = ensure_schema(db).await {
        tracing::error!("Failed to ensure database schema: {}", e);
    }

    match premium.refresh().await {
        Ok(sets) => tracing::info!(
            "Loaded {} premium guilds and {} premium users",
            sets.guilds.len(),
            sets.users.len()
        ),
        Err(e) => tracing::error!("Failed to load premium sets: {}", e),
    }

    ctx.set_activity(Some(ActivityData::watching("paint dry")));
}
