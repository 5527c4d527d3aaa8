//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::guild_config::create_guild_config(&db).await?;
//!     let cached = factory::invite::create_invite_cache(&db, "abc", 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let config = factory::guild_config::GuildConfigFactory::new(&db)
//!     .guild_id(42)
//!     .lang(Some("nl"))
//!     .join_channel(Some(7), Some("Hi {user}"))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Create guild configuration rows
//! - `premium` - Create premium guild and user rows
//! - `invite` - Create invite cache and invite stat rows
//! - `helpers` - ID generation and multi-row setups

pub mod guild_config;
pub mod helpers;
pub mod invite;
pub mod premium;

// Re-export commonly used factory functions for concise usage
pub use guild_config::create_guild_config;
pub use helpers::create_tracked_guild_with_invite;
pub use invite::{create_invite_cache, create_invite_stat};
pub use premium::{create_premium_guild, create_premium_user};
