//! Database repository layer for the bot's tables.
//!
//! Repositories borrow the shared `DatabaseConnection` and perform all queries, inserts and
//! upserts for one domain each. Discord snowflakes enter and leave as `u64` and are stored as
//! `i64`, the only integer width SQLite offers.

pub mod guild_config;
pub mod invite;
pub mod premium;

#[cfg(test)]
mod test;
