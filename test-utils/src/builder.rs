use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Either add entity tables one by one, or ask for the real migrations to be
/// applied, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{InviteCache, InviteStat};
///
/// let test = TestBuilder::new()
///     .with_table(InviteCache)
///     .with_table(InviteStat)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
    /// Whether to run `migration::Migrator` instead of (or before) the entity tables.
    migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the bot reads or writes.
    ///
    /// - GuildConfig
    /// - PremiumGuild
    /// - PremiumUser
    /// - InviteCache
    /// - InviteStat
    pub fn with_bot_tables(self) -> Self {
        self.with_table(GuildConfig)
            .with_table(PremiumGuild)
            .with_table(PremiumUser)
            .with_table(InviteCache)
            .with_table(InviteStat)
    }

    /// Applies the production migrations instead of entity-derived tables.
    ///
    /// Use this when a test depends on column defaults or indexes that only the
    /// migrations define.
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, runs the migrations if requested,
    /// then executes all CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        }

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
