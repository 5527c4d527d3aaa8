//! Premium factories for creating premium guild and user rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a guild as premium.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
pub async fn create_premium_guild(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::premium_guild::Model, DbErr> {
    entity::premium_guild::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        granted_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Marks a user as premium.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID
pub async fn create_premium_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::premium_user::Model, DbErr> {
    entity::premium_user::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        granted_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
