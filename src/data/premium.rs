use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::model::premium::PremiumSets;

pub struct PremiumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PremiumRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads both premium membership sets.
    ///
    /// # Returns
    /// - `Ok(PremiumSets)`: Every premium guild id and user id
    /// - `Err(DbErr)`: Database error while reading either table
    pub async fn get_sets(&self) -> Result<PremiumSets, DbErr> {
        let guilds = entity::prelude::PremiumGuild::find()
            .select_only()
            .column(entity::premium_guild::Column::GuildId)
            .into_tuple::<i64>()
            .all(self.db)
            .await?;

        let users = entity::prelude::PremiumUser::find()
            .select_only()
            .column(entity::premium_user::Column::UserId)
            .into_tuple::<i64>()
            .all(self.db)
            .await?;

        Ok(PremiumSets {
            guilds: guilds.into_iter().map(|id| id as u64).collect(),
            users: users.into_iter().map(|id| id as u64).collect(),
        })
    }

    /// Grants premium to a guild. Granting twice keeps the original timestamp.
    pub async fn grant_guild(&self, guild_id: u64) -> Result<(), DbErr> {
        let result = entity::prelude::PremiumGuild::insert(entity::premium_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            granted_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::premium_guild::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Grants premium to a user. Granting twice keeps the original timestamp.
    pub async fn grant_user(&self, user_id: u64) -> Result<(), DbErr> {
        let result = entity::prelude::PremiumUser::insert(entity::premium_user::ActiveModel {
            user_id: ActiveValue::Set(user_id as i64),
            granted_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::premium_user::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Revokes premium from a guild.
    ///
    /// # Returns
    /// - `Ok(true)`: The guild was premium and has been removed
    /// - `Ok(false)`: The guild was not premium
    /// - `Err(DbErr)`: Database error during delete
    pub async fn revoke_guild(&self, guild_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::PremiumGuild::delete_many()
            .filter(entity::premium_guild::Column::GuildId.eq(guild_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Revokes premium from a user. Returns whether a row was removed.
    pub async fn revoke_user(&self, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::PremiumUser::delete_many()
            .filter(entity::premium_user::Column::UserId.eq(user_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
