//! In-memory premium membership cache.
//!
//! The cache is owned by the bot and cloned into handlers, commands and the refresh job.
//! Reads never touch the database. `refresh` re-pulls both sets from the store; grants and
//! revocations write through to the store first and then update the sets directly.
//!
//! Every store round trip that ends in a set update holds the `writes` lock until the update
//! is applied, so a refresh can never swap in a snapshot read before a concurrent grant or
//! revocation reached the store.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::{data::premium::PremiumRepository, error::AppError, model::premium::PremiumSets};

#[derive(Clone)]
pub struct PremiumCache {
    db: DatabaseConnection,
    sets: Arc<RwLock<PremiumSets>>,
    writes: Arc<Mutex<()>>,
}

impl PremiumCache {
    /// Creates an empty cache. Call [`PremiumCache::refresh`] to load the stored sets.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            sets: Arc::new(RwLock::new(PremiumSets::default())),
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Replaces both sets with the current store contents.
    ///
    /// The sets are swapped in one write, so readers see either the old or the new
    /// snapshot. On failure the previous sets are kept.
    ///
    /// # Returns
    /// - `Ok(PremiumSets)`: Snapshot now held by the cache
    /// - `Err(AppError::DbErr)`: Store could not be read; cache unchanged
    pub async fn refresh(&self) -> Result<PremiumSets, AppError> {
        let _writes = self.writes.lock().await;
        let fresh = PremiumRepository::new(&self.db).get_sets().await?;

        let mut sets = self.sets.write().await;
        *sets = fresh.clone();

        Ok(fresh)
    }

    pub async fn is_premium_guild(&self, guild_id: u64) -> bool {
        self.sets.read().await.guilds.contains(&guild_id)
    }

    pub async fn is_premium_user(&self, user_id: u64) -> bool {
        self.sets.read().await.users.contains(&user_id)
    }

    pub async fn grant_guild(&self, guild_id: u64) -> Result<(), AppError> {
        let _writes = self.writes.lock().await;
        PremiumRepository::new(&self.db).grant_guild(guild_id).await?;
        self.sets.write().await.guilds.insert(guild_id);

        Ok(())
    }

    pub async fn grant_user(&self, user_id: u64) -> Result<(), AppError> {
        let _writes = self.writes.lock().await;
        PremiumRepository::new(&self.db).grant_user(user_id).await?;
        self.sets.write().await.users.insert(user_id);

        Ok(())
    }

    /// Revokes guild premium. Returns whether the guild had premium in the store.
    pub async fn revoke_guild(&self, guild_id: u64) -> Result<bool, AppError> {
        let _writes = self.writes.lock().await;
        let removed = PremiumRepository::new(&self.db).revoke_guild(guild_id).await?;
        self.sets.write().await.guilds.remove(&guild_id);

        Ok(removed)
    }

    /// Revokes user premium. Returns whether the user had premium in the store.
    pub async fn revoke_user(&self, user_id: u64) -> Result<bool, AppError> {
        let _writes = self.writes.lock().await;
        let removed = PremiumRepository::new(&self.db).revoke_user(user_id).await?;
        self.sets.write().await.users.remove(&user_id);

        Ok(removed)
    }
}
