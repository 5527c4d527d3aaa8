//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_guild;
//!
//! let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::TestGuildBuilder` - Guild objects with member count and system channel control
//! - `member::TestMemberBuilder` - Guild members with account and per-guild avatars

pub mod guild;
pub mod member;

pub use guild::{create_test_guild, TestGuildBuilder, TEST_OWNER_ID, TEST_SYSTEM_CHANNEL_ID};
pub use member::TestMemberBuilder;
