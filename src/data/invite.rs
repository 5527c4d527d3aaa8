use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, Order,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::invite::InviterTotal;

/// Last observed use count per invite code.
pub struct InviteCacheRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteCacheRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cached use count of an invite, `None` when the code was never observed.
    pub async fn get_uses(&self, code: &str) -> Result<Option<u64>, DbErr> {
        let cached = entity::prelude::InviteCache::find_by_id(code.to_string())
            .one(self.db)
            .await?;

        Ok(cached.map(|invite| invite.uses as u64))
    }

    /// Stores the observed use count, overwriting the previous value.
    pub async fn upsert(&self, code: &str, uses: u64) -> Result<(), DbErr> {
        entity::prelude::InviteCache::insert(entity::invite_cache::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            uses: ActiveValue::Set(uses as i64),
        })
        .on_conflict(
            OnConflict::column(entity::invite_cache::Column::Code)
                .update_column(entity::invite_cache::Column::Uses)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}

/// Cumulative uses attributed to inviters.
pub struct InviteStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteStatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a zero-use stat row for an invite unless one exists.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the invite belongs to
    /// - `code`: Invite code
    /// - `inviter_id`: Invite creator, `0` when unknown
    pub async fn insert_ignore(
        &self,
        guild_id: u64,
        code: &str,
        inviter_id: u64,
    ) -> Result<(), DbErr> {
        let result = entity::prelude::InviteStat::insert(entity::invite_stat::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            code: ActiveValue::Set(code.to_string()),
            inviter_id: ActiveValue::Set(inviter_id as i64),
            uses: ActiveValue::Set(0),
        })
        .on_conflict(
            OnConflict::columns([
                entity::invite_stat::Column::GuildId,
                entity::invite_stat::Column::Code,
            ])
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

    /// Sets the attributed use count of an invite to the observed value.
    pub async fn set_uses(&self, guild_id: u64, code: &str, uses: u64) -> Result<(), DbErr> {
        entity::prelude::InviteStat::update_many()
            .filter(entity::invite_stat::Column::GuildId.eq(guild_id as i64))
            .filter(entity::invite_stat::Column::Code.eq(code))
            .col_expr(entity::invite_stat::Column::Uses, Expr::value(uses as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Top inviters of a guild, most uses first.
    ///
    /// Uses are summed across all invite codes of the same inviter. Ties are broken by the
    /// lower inviter id so the order is stable.
    ///
    /// # Arguments
    /// - `guild_id`: Guild to rank
    /// - `limit`: Maximum number of inviters returned
    pub async fn get_leaderboard(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<InviterTotal>, DbErr> {
        let rows = entity::prelude::InviteStat::find()
            .select_only()
            .column(entity::invite_stat::Column::InviterId)
            .column_as(Expr::col(entity::invite_stat::Column::Uses).sum(), "total")
            .filter(entity::invite_stat::Column::GuildId.eq(guild_id as i64))
            .group_by(entity::invite_stat::Column::InviterId)
            .order_by(Expr::col(entity::invite_stat::Column::Uses).sum(), Order::Desc)
            .order_by(entity::invite_stat::Column::InviterId, Order::Asc)
            .limit(limit)
            .into_tuple::<(i64, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(inviter_id, uses)| InviterTotal {
                inviter_id: inviter_id as u64,
                uses: Ord::max(uses, 0) as u64,
            })
            .collect())
    }

    /// Total uses attributed to one inviter in a guild, `0` when none.
    pub async fn get_total_for_inviter(&self, guild_id: u64, inviter_id: u64) -> Result<u64, DbErr> {
        let total = entity::prelude::InviteStat::find()
            .select_only()
            .column_as(Expr::col(entity::invite_stat::Column::Uses).sum(), "total")
            .filter(entity::invite_stat::Column::GuildId.eq(guild_id as i64))
            .filter(entity::invite_stat::Column::InviterId.eq(inviter_id as i64))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(Ord::max(total.flatten().unwrap_or(0), 0) as u64)
    }
}
