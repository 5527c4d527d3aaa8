use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Member, User};

use crate::service::{
    greeting::GreetingService, guild_config::GuildConfigService,
    invite_tracker::InviteTrackerService,
};

/// Handles the guild_member_addition event when a member joins a guild.
///
/// Guilds without a configuration row are ignored. Otherwise the join announcement is
/// posted when a join channel is set, and the invite diff runs when tracking is enabled.
pub async fn handle_guild_member_addition(db: &DatabaseConnection, ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id.get();

    let Some(config) = (match GuildConfigService::new(db).get(guild_id).await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to read config of guild {}: {}", guild_id, e);
            return;
        }
    }) else {
        return;
    };

    let settings = config.join_settings();

    if settings.channel_id.is_some() {
        let server = guild_name(&ctx, new_member.guild_id).await;
        let greeting = GreetingService::new(ctx.http.clone());

        if let Err(e) = greeting.send_join(&settings, &new_member, &server).await {
            tracing::warn!("Failed to send join message in guild {}: {}", guild_id, e);
        }
    }

    if !settings.invite_tracking {
        return;
    }

    let live = match InviteTrackerService::fetch_live(&ctx.http, guild_id).await {
        Ok(live) => live,
        Err(e) => {
            tracing::warn!("Failed to fetch invites of guild {}: {}", guild_id, e);
            return;
        }
    };

    match InviteTrackerService::new(db).track(guild_id, &live).await {
        Ok(outcome) if outcome.stat_upserts > 0 => tracing::debug!(
            "Credited join of {} in guild {} to {} invite(s)",
            new_member.user.id,
            guild_id,
            outcome.stat_upserts
        ),
        Ok(_) => {}
        Err(e) => tracing::error!("Failed to track invites of guild {}: {}", guild_id, e),
    }
}

/// Handles the guild_member_removal event when a member leaves a guild.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member_data_if_available: Option<Member>,
) {
    let Some(config) = (match GuildConfigService::new(db).get(guild_id.get()).await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to read config of guild {}: {}", guild_id, e);
            return;
        }
    }) else {
        return;
    };

    let settings = config.leave_settings();
    if settings.channel_id.is_none() {
        return;
    }

    let server = guild_name(&ctx, guild_id).await;
    let greeting = GreetingService::new(ctx.http.clone());

    if let Err(e) = greeting
        .send_leave(&settings, &user, member_data_if_available.as_ref(), &server)
        .await
    {
        tracing::warn!("Failed to send leave message in guild {}: {}", guild_id, e);
    }
}

/// Guild name from the cache, falling back to the API and then to the raw id.
async fn guild_name(ctx: &Context, guild_id: GuildId) -> String {
    if let Some(name) = guild_id.name(&ctx.cache) {
        return name;
    }

    match ctx.http.get_guild(guild_id).await {
        Ok(guild) => guild.name,
        Err(e) => {
            tracing::warn!("Failed to fetch name of guild {}: {}", guild_id, e);
            guild_id.to_string()
        }
    }
}
