//! SeaORM entities for the bot's SQLite store.
//!
//! Table definitions live in the `migration` crate; these models mirror them.

pub mod prelude;

pub mod guild_config;
pub mod invite_cache;
pub mod invite_stat;
pub mod premium_guild;
pub mod premium_user;
