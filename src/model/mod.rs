//! Domain models and parameter types.
//!
//! Entity models are converted into these types at the repository boundary so the
//! service layer and the event handlers work with Discord-shaped `u64` ids and
//! resolved defaults instead of raw rows.

pub mod guild_config;
pub mod guild_log;
pub mod invite;
pub mod premium;
