//! Discord gateway client, event handlers and command framework.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild joins and removals
//! - `GUILD_MEMBERS` - Member joins and leaves (privileged intent)
//! - `GUILD_MESSAGES` and `MESSAGE_CONTENT` - Prefix commands (`MESSAGE_CONTENT` is privileged)
//! - `GUILD_INVITES` - Invite creation, used to seed invite tracking
//!
//! Privileged intents must be enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
