//! Attributes member joins to invites by diffing use counts.
//!
//! Discord does not say which invite a member used. Every join, the live invite list is
//! compared with the last observed counts and any invite whose count went up is credited to
//! its creator. Deleted and recreated codes reset their count and are not detected.

use sea_orm::DatabaseConnection;
use serenity::{all::GuildId, http::Http};

use crate::{
    data::invite::{InviteCacheRepository, InviteStatRepository},
    error::AppError,
    model::invite::{InviteTrackOutcome, LiveInvite},
};

/// Inviter id stored for invites without a known creator.
pub const UNKNOWN_INVITER: u64 = 0;

pub struct InviteTrackerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteTrackerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the current invites of a guild.
    ///
    /// Requires the Manage Server permission in the guild.
    pub async fn fetch_live(http: &Http, guild_id: u64) -> Result<Vec<LiveInvite>, AppError> {
        let invites = GuildId::new(guild_id).invites(http).await?;

        Ok(invites.iter().map(LiveInvite::from).collect())
    }

    /// Compares live counts with the cache and credits increases to inviters.
    ///
    /// For every invite whose count rose, a stat row is created at zero if missing and then
    /// set to the observed count. The cache is written for every invite, including ones
    /// seen for the first time, which are not credited.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the invites belong to
    /// - `live`: Invites as currently reported by Discord
    ///
    /// # Returns
    /// - `Ok(InviteTrackOutcome)`: Counts of stat upserts and cache writes
    /// - `Err(AppError::DbErr)`: Database error; earlier writes of the pass are kept
    pub async fn track(
        &self,
        guild_id: u64,
        live: &[LiveInvite],
    ) -> Result<InviteTrackOutcome, AppError> {
        let cache_repo = InviteCacheRepository::new(self.db);
        let stat_repo = InviteStatRepository::new(self.db);
        let mut outcome = InviteTrackOutcome::default();

        for invite in live {
            let cached = cache_repo.get_uses(&invite.code).await?;

            if cached.is_some_and(|cached| invite.uses > cached) {
                let inviter_id = invite.inviter_id.unwrap_or(UNKNOWN_INVITER);

                stat_repo
                    .insert_ignore(guild_id, &invite.code, inviter_id)
                    .await?;
                stat_repo
                    .set_uses(guild_id, &invite.code, invite.uses)
                    .await?;

                outcome.stat_upserts += 1;
            }

            cache_repo.upsert(&invite.code, invite.uses).await?;
            outcome.cache_writes += 1;
        }

        tracing::debug!(
            "Tracked {} invites for guild {}: {} increased",
            live.len(),
            guild_id,
            outcome.stat_upserts
        );

        Ok(outcome)
    }

    /// Records current counts without crediting anyone.
    ///
    /// Used when tracking is switched on and when a new invite is created, so the first use
    /// afterwards shows up as an increase.
    pub async fn seed(&self, live: &[LiveInvite]) -> Result<usize, AppError> {
        let cache_repo = InviteCacheRepository::new(self.db);

        for invite in live {
            cache_repo.upsert(&invite.code, invite.uses).await?;
        }

        Ok(live.len())
    }
}
