use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, UpdateMany,
};

use crate::model::guild_config::{GuildConfigParam, UpdateGuildConfigParam};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a default configuration row unless one already exists.
    ///
    /// Called when the bot joins a guild. Rejoining a guild keeps the settings stored during
    /// the previous stay.
    ///
    /// # Returns
    /// - `Ok(true)`: A new row was inserted
    /// - `Ok(false)`: The guild already had a row
    /// - `Err(DbErr)`: Database error during insert
    pub async fn insert_default(&self, guild_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            lang: ActiveValue::Set(None),
            join_channel_id: ActiveValue::Set(None),
            join_message: ActiveValue::Set(None),
            leave_channel_id: ActiveValue::Set(None),
            leave_message: ActiveValue::Set(None),
            invite_tracking: ActiveValue::Set(false),
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(rows_affected) => Ok(rows_affected > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfigParam>, DbErr> {
        let config = entity::prelude::GuildConfig::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        Ok(config.map(GuildConfigParam::from_entity))
    }

    /// Reads only the language column of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(lang))`: Row exists and the language is set
    /// - `Ok(None)`: No row, or the language column is null
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_lang(&self, guild_id: u64) -> Result<Option<String>, DbErr> {
        let lang = entity::prelude::GuildConfig::find_by_id(guild_id as i64)
            .select_only()
            .column(entity::guild_config::Column::Lang)
            .into_tuple::<Option<String>>()
            .one(self.db)
            .await?;

        Ok(lang.flatten())
    }

    /// Applies a partial update, creating the row first when the guild has none.
    ///
    /// # Returns
    /// - `Ok(GuildConfigParam)`: The configuration after the update
    /// - `Err(DbErr)`: Database error during insert, update or reload
    pub async fn update(
        &self,
        guild_id: u64,
        param: UpdateGuildConfigParam,
    ) -> Result<GuildConfigParam, DbErr> {
        self.insert_default(guild_id).await?;

        if let Some(update) = Self::build_update(guild_id, param) {
            update.exec(self.db).await?;
        }

        self.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild_config {}", guild_id)))
    }

    fn build_update(
        guild_id: u64,
        param: UpdateGuildConfigParam,
    ) -> Option<UpdateMany<entity::prelude::GuildConfig>> {
        use entity::guild_config::Column;

        let mut update = entity::prelude::GuildConfig::update_many()
            .filter(Column::GuildId.eq(guild_id as i64));
        let mut changed = false;

        if let Some(lang) = param.lang {
            update = update.col_expr(Column::Lang, Expr::value(lang));
            changed = true;
        }
        if let Some(channel) = param.join_channel_id {
            update = update.col_expr(Column::JoinChannelId, Expr::value(channel.map(|id| id as i64)));
            changed = true;
        }
        if let Some(message) = param.join_message {
            update = update.col_expr(Column::JoinMessage, Expr::value(message));
            changed = true;
        }
        if let Some(channel) = param.leave_channel_id {
            update = update.col_expr(Column::LeaveChannelId, Expr::value(channel.map(|id| id as i64)));
            changed = true;
        }
        if let Some(message) = param.leave_message {
            update = update.col_expr(Column::LeaveMessage, Expr::value(message));
            changed = true;
        }
        if let Some(enabled) = param.invite_tracking {
            update = update.col_expr(Column::InviteTracking, Expr::value(enabled));
            changed = true;
        }

        changed.then_some(update)
    }
}
