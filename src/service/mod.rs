//! Service layer between the Discord-facing code and the repositories.
//!
//! Services resolve defaults, coordinate several repositories and talk to Discord's HTTP API.
//! Event handlers and commands call services, never repositories directly.

pub mod greeting;
pub mod guild_config;
pub mod guild_log;
pub mod invite_tracker;
pub mod premium;
