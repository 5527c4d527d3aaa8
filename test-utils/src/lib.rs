//! Rosé Test Utils
//!
//! Provides shared testing utilities for the bot crate. This crate offers a builder pattern
//! for creating test contexts with in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory** / **serenity**: Row factories and Discord model fixtures
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildConfig;
//!
//! #[tokio::test]
//! async fn reads_guild_config() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildConfig)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
