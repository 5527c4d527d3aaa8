//! Invite factories for the invite cache and invite stat tables.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an invite cache row.
///
/// # Arguments
/// - `db` - Database connection
/// - `code` - Invite code
/// - `uses` - Last observed use count
pub async fn create_invite_cache(
    db: &DatabaseConnection,
    code: &str,
    uses: i64,
) -> Result<entity::invite_cache::Model, DbErr> {
    entity::invite_cache::ActiveModel {
        code: ActiveValue::Set(code.to_string()),
        uses: ActiveValue::Set(uses),
    }
    .insert(db)
    .await
}

/// Creates an invite stat row.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the invite belongs to
/// - `code` - Invite code
/// - `inviter_id` - Inviter user ID, `0` when unknown
/// - `uses` - Attributed uses
pub async fn create_invite_stat(
    db: &DatabaseConnection,
    guild_id: i64,
    code: &str,
    inviter_id: i64,
    uses: i64,
) -> Result<entity::invite_stat::Model, DbErr> {
    entity::invite_stat::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        code: ActiveValue::Set(code.to_string()),
        inviter_id: ActiveValue::Set(inviter_id),
        uses: ActiveValue::Set(uses),
    }
    .insert(db)
    .await
}
