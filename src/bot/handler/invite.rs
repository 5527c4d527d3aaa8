use sea_orm::DatabaseConnection;
use serenity::all::InviteCreateEvent;

use crate::{
    model::invite::LiveInvite,
    service::{guild_config::GuildConfigService, invite_tracker::InviteTrackerService},
};

/// Handles the invite_create event.
///
/// Seeds the invite cache for guilds with tracking enabled so the first use of the new
/// invite is credited to its creator.
pub async fn handle_invite_create(db: &DatabaseConnection, data: InviteCreateEvent) {
    let Some(guild_id) = data.guild_id else {
        return;
    };

    let tracked = match GuildConfigService::new(db).get(guild_id.get()).await {
        Ok(config) => config.is_some_and(|c| c.invite_tracking),
        Err(e) => {
            tracing::error!("Failed to read config of guild {}: {}", guild_id, e);
            return;
        }
    };

    if !tracked {
        return;
    }

    let invite = LiveInvite::new(
        data.code,
        data.uses,
        data.inviter.as_ref().map(|user| user.id.get()),
    );

    if let Err(e) = InviteTrackerService::new(db).seed(&[invite]).await {
        tracing::error!("Failed to cache new invite in guild {}: {}", guild_id, e);
    }
}
