use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::premium::PremiumCache};

/// Starts the premium refresh scheduler.
///
/// Re-pulls the premium sets on the given cron schedule so grants written outside this
/// process show up without a restart. A failed refresh keeps the previous sets.
///
/// # Arguments
/// - `schedule`: Cron expression with seconds, e.g. `0 */10 * * * *`
/// - `cache`: Premium cache shared with the bot
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler; keep it alive for the lifetime of the bot
/// - `Err(AppError::SchedulerErr)`: Invalid schedule or scheduler failure
pub async fn start_scheduler(schedule: &str, cache: PremiumCache) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler.add(refresh_job(schedule, cache)?).await?;
    scheduler.start().await?;

    tracing::info!("Premium refresh scheduler started ({})", schedule);

    Ok(scheduler)
}

fn refresh_job(schedule: &str, cache: PremiumCache) -> Result<Job, AppError> {
    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let cache = cache.clone();

        Box::pin(async move {
            match cache.refresh().await {
                Ok(sets) => tracing::debug!(
                    "Refreshed premium sets: {} guilds, {} users",
                    sets.guilds.len(),
                    sets.users.len()
                ),
                Err(e) => tracing::error!("Error refreshing premium sets: {}", e),
            }
        })
    })?;

    Ok(job)
}
