//! Guild config factory for creating test configuration rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id(987654321)
///     .lang(Some("nl"))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::guild_config::Model,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique id
    /// - lang, channels and messages: `None`
    /// - invite_tracking: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: entity::guild_config::Model {
                guild_id: next_id(),
                lang: None,
                join_channel_id: None,
                join_message: None,
                leave_channel_id: None,
                leave_message: None,
                invite_tracking: false,
            },
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.entity.guild_id = guild_id;
        self
    }

    /// Sets the stored language code.
    pub fn lang(mut self, lang: Option<&str>) -> Self {
        self.entity.lang = lang.map(str::to_string);
        self
    }

    /// Sets the join channel and template.
    pub fn join_channel(mut self, channel_id: Option<i64>, message: Option<&str>) -> Self {
        self.entity.join_channel_id = channel_id;
        self.entity.join_message = message.map(str::to_string);
        self
    }

    /// Sets the leave channel and template.
    pub fn leave_channel(mut self, channel_id: Option<i64>, message: Option<&str>) -> Self {
        self.entity.leave_channel_id = channel_id;
        self.entity.leave_message = message.map(str::to_string);
        self
    }

    /// Enables or disables invite tracking.
    pub fn invite_tracking(mut self, enabled: bool) -> Self {
        self.entity.invite_tracking = enabled;
        self
    }

    /// Builds and inserts the guild config row.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let entity = self.entity;
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(entity.guild_id),
            lang: ActiveValue::Set(entity.lang),
            join_channel_id: ActiveValue::Set(entity.join_channel_id),
            join_message: ActiveValue::Set(entity.join_message),
            leave_channel_id: ActiveValue::Set(entity.leave_channel_id),
            leave_message: ActiveValue::Set(entity.leave_message),
            invite_tracking: ActiveValue::Set(entity.invite_tracking),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
