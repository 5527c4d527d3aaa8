//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start well above zero so they never collide with the `0` placeholder
/// used for unknown inviters.
///
/// # Returns
/// - `i64` - Next unique counter value
pub fn next_id() -> i64 {
    1_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst) as i64
}

/// Creates a guild with invite tracking enabled and one cached invite.
///
/// # Arguments
/// - `db` - Database connection
/// - `code` - Invite code to cache
/// - `uses` - Cached use count
///
/// # Returns
/// - `Ok((config, cached))` - The guild config and invite cache rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_tracked_guild_with_invite(
    db: &DatabaseConnection,
    code: &str,
    uses: i64,
) -> Result<(entity::guild_config::Model, entity::invite_cache::Model), DbErr> {
    let config = crate::factory::guild_config::GuildConfigFactory::new(db)
        .invite_tracking(true)
        .build()
        .await?;
    let cached = crate::factory::invite::create_invite_cache(db, code, uses).await?;

    Ok((config, cached))
}
