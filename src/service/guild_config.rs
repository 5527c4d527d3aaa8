use sea_orm::DatabaseConnection;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{GuildConfigParam, UpdateGuildConfigParam, DEFAULT_LANG},
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures the guild has a configuration row.
    ///
    /// # Returns
    /// - `Ok(true)`: A default row was created
    /// - `Ok(false)`: The guild was already configured
    /// - `Err(AppError::DbErr)`: Database error during insert
    pub async fn ensure_exists(&self, guild_id: u64) -> Result<bool, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        Ok(repo.insert_default(guild_id).await?)
    }

    pub async fn get(&self, guild_id: u64) -> Result<Option<GuildConfigParam>, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        Ok(repo.find_by_guild_id(guild_id).await?)
    }

    pub async fn update(
        &self,
        guild_id: u64,
        param: UpdateGuildConfigParam,
    ) -> Result<GuildConfigParam, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        Ok(repo.update(guild_id, param).await?)
    }

    /// Reads the stored language of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(lang))`: A non-empty language is stored
    /// - `Ok(None)`: Use the default language
    /// - `Err(AppError::DbErr)`: The store could not be read
    pub async fn try_get_lang(&self, guild_id: u64) -> Result<Option<String>, AppError> {
        let repo = GuildConfigRepository::new(self.db);
        let lang = repo.get_lang(guild_id).await?;

        Ok(lang.filter(|lang| !lang.trim().is_empty()))
    }

    /// Language of a guild, `"en"` whenever nothing usable is stored.
    ///
    /// Store failures are logged and resolve to the default so replies always go out.
    pub async fn get_lang(&self, guild_id: u64) -> String {
        match self.try_get_lang(guild_id).await {
            Ok(Some(lang)) => lang,
            Ok(None) => DEFAULT_LANG.to_string(),
            Err(e) => {
                tracing::warn!("Failed to read language of guild {}: {}", guild_id, e);
                DEFAULT_LANG.to_string()
            }
        }
    }
}
