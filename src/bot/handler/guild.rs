//! Guild join and removal handlers.
//!
//! `guild_create` fires for every guild on startup and when a guild recovers from an outage.
//! Only events flagged as new joins are acted on. Likewise `guild_delete` fires when a guild
//! becomes unavailable; only actual removals are logged.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::{
    config::Config,
    model::guild_log::GuildLogEntry,
    service::{guild_config::GuildConfigService, guild_log::GuildLogService},
};

/// Handles the guild_create event.
///
/// For a new guild: creates its default configuration, posts the join embed to the operator
/// log channel and greets the guild in its system channel. A failing step is logged and the
/// others still run.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if is_new != Some(true) {
        tracing::trace!("Guild {} ({}) available", guild.name, guild.id);
        return;
    }

    tracing::info!("Joined guild {} ({})", guild.name, guild.id);

    let config_service = GuildConfigService::new(db);
    if let Err(e) = config_service.ensure_exists(guild.id.get()).await {
        tracing::error!("Failed to create config for guild {}: {}", guild.id, e);
    }

    let log_service = GuildLogService::new(ctx.http.clone(), config.guild_log_channel_id);
    let entry = GuildLogEntry::from_guild(&guild, ctx.cache.guild_count());

    if let Err(e) = log_service.log_join(&entry).await {
        tracing::warn!("Failed to log join of guild {}: {}", guild.id, e);
    }

    let bot_id = ctx.cache.current_user().id;
    match log_service.send_welcome(&guild, bot_id).await {
        Ok(true) => tracing::debug!("Sent welcome to guild {}", guild.id),
        Ok(false) => tracing::debug!("No usable system channel in guild {}", guild.id),
        Err(e) => tracing::warn!("Failed to send welcome to guild {}: {}", guild.id, e),
    }
}

/// Handles the guild_delete event.
///
/// The guild's configuration is kept so a later rejoin restores it.
pub async fn handle_guild_delete(
    config: &Config,
    ctx: Context,
    incomplete: UnavailableGuild,
    full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::debug!("Guild {} became unavailable", incomplete.id);
        return;
    }

    let total = ctx.cache.guild_count();
    let entry = match &full {
        Some(guild) => GuildLogEntry::from_guild(guild, total),
        None => GuildLogEntry::unknown(incomplete.id.get(), total),
    };

    tracing::info!("Removed from guild {} ({})", entry.name, entry.guild_id);

    let log_service = GuildLogService::new(ctx.http.clone(), config.guild_log_channel_id);
    if let Err(e) = log_service.log_remove(&entry).await {
        tracing::warn!("Failed to log removal from guild {}: {}", entry.guild_id, e);
    }
}
