//! Operator log and welcome embeds for guild joins and removals.

use serenity::{
    all::{ChannelId, CreateMessage, Guild, Permissions, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    model::guild_log::{EmbedSpec, GuildLogEntry},
};

pub struct GuildLogService {
    http: Arc<Http>,
    log_channel_id: Option<u64>,
}

impl GuildLogService {
    pub fn new(http: Arc<Http>, log_channel_id: Option<u64>) -> Self {
        Self {
            http,
            log_channel_id,
        }
    }

    /// Posts the join embed to the log channel. Returns `false` when logging is disabled.
    pub async fn log_join(&self, entry: &GuildLogEntry) -> Result<bool, AppError> {
        self.post(EmbedSpec::guild_join(entry)).await
    }

    /// Posts the removal embed to the log channel. Returns `false` when logging is disabled.
    pub async fn log_remove(&self, entry: &GuildLogEntry) -> Result<bool, AppError> {
        self.post(EmbedSpec::guild_remove(entry)).await
    }

    /// Posts the welcome embed into the guild's system channel.
    ///
    /// Skipped when the guild has no system channel, or when the cached guild shows the bot
    /// cannot send messages there. If the bot's member is not cached the send is attempted
    /// and Discord decides.
    ///
    /// # Returns
    /// - `Ok(true)`: Welcome posted
    /// - `Ok(false)`: No system channel or no permission
    /// - `Err(AppError::DiscordErr)`: Discord refused the message
    pub async fn send_welcome(&self, guild: &Guild, bot_id: UserId) -> Result<bool, AppError> {
        let Some(channel_id) = guild.system_channel_id else {
            return Ok(false);
        };

        if let Some(permissions) = bot_permissions_in(guild, channel_id, bot_id) {
            if !permissions.send_messages() {
                tracing::debug!(
                    "Cannot send messages in system channel of guild {}",
                    guild.id
                );
                return Ok(false);
            }
        }

        channel_id
            .send_message(
                &self.http,
                CreateMessage::new().embed(EmbedSpec::welcome().to_embed()),
            )
            .await?;

        Ok(true)
    }

    async fn post(&self, spec: EmbedSpec) -> Result<bool, AppError> {
        let Some(channel_id) = self.log_channel_id else {
            return Ok(false);
        };

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(spec.to_embed()))
            .await?;

        Ok(true)
    }
}

/// Bot permissions in a channel as far as the cached guild can tell.
fn bot_permissions_in(guild: &Guild, channel_id: ChannelId, bot_id: UserId) -> Option<Permissions> {
    let channel = guild.channels.get(&channel_id)?;
    let member = guild.members.get(&bot_id)?;

    Some(guild.user_permissions_in(channel, member))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::TestGuildBuilder;

    /// Tests that disabled logging skips the send without touching Discord.
    ///
    /// Expected: Ok(false) for both embeds
    #[tokio::test]
    async fn skips_when_log_channel_unset() {
        let service = GuildLogService::new(Arc::new(Http::new("")), None);
        let entry = GuildLogEntry::unknown(1, 1);

        assert!(!service.log_join(&entry).await.unwrap());
        assert!(!service.log_remove(&entry).await.unwrap());
    }

    /// Tests the welcome for a guild without a system channel.
    ///
    /// Expected: Ok(false)
    #[tokio::test]
    async fn skips_welcome_without_system_channel() {
        let service = GuildLogService::new(Arc::new(Http::new("")), None);
        let guild = TestGuildBuilder::new(1, "Quiet").system_channel(None).build();

        let sent = service.send_welcome(&guild, UserId::new(1)).await.unwrap();

        assert!(!sent);
    }

    #[test]
    fn permissions_unknown_without_cached_channel() {
        let guild = TestGuildBuilder::new(1, "Guild").build();
        let channel_id = guild.system_channel_id.unwrap();

        assert!(bot_permissions_in(&guild, channel_id, UserId::new(1)).is_none());
    }
}
