pub use super::guild_config::Entity as GuildConfig;
pub use super::invite_cache::Entity as InviteCache;
pub use super::invite_stat::Entity as InviteStat;
pub use super::premium_guild::Entity as PremiumGuild;
pub use super::premium_user::Entity as PremiumUser;
