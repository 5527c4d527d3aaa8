use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildId, InviteCreateEvent, Member, Ready,
    UnavailableGuild, User,
};
use serenity::async_trait;

use crate::{config::Config, service::premium::PremiumCache};

pub mod guild;
pub mod invite;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub premium: PremiumCache,
    pub config: Config,
}

impl Handler {
    pub fn new(db: DatabaseConnection, premium: PremiumCache, config: Config) -> Self {
        Self {
            db,
            premium,
            config,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.db, &self.premium, &self.config, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, &self.config, ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.config, ctx, incomplete, full).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.db, ctx, guild_id, user, member_data_if_available)
            .await;
    }

    /// Called when an invite is created in a guild
    async fn invite_create(&self, _ctx: Context, data: InviteCreateEvent) {
        invite::handle_invite_create(&self.db, data).await;
    }
}
