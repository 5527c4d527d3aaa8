//! Error types and error classification.
//!
//! `AppError` is the top-level error returned by repositories, services, commands and
//! startup code. Event handlers never propagate it; they log it and carry on. Callers that
//! need to react differently to failures use [`AppError::kind`], which folds every variant
//! into the closed [`ErrorKind`] set.

pub mod config;
pub mod extension;
pub mod locale;

use serenity::http::HttpError;
use serenity::model::ModelError;
use thiserror::Error;

use crate::error::{config::ConfigError, extension::ExtensionError, locale::LocaleError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Extension failed to provide its commands.
    #[error(transparent)]
    ExtensionErr(#[from] ExtensionError),

    /// Embedded translations failed to load.
    #[error(transparent)]
    LocaleErr(#[from] LocaleError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while preparing the data directory.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// The bot or the invoking user lacks a permission.
    ///
    /// # Fields
    /// - Message naming the missing permission or the refused action
    #[error("{0}")]
    PermissionDenied(String),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Closed classification of failures.
///
/// Lets a caller distinguish "fall back to a default" from "the operation truly failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The database could not be reached or the query failed.
    StoreUnavailable,
    /// Discord refused the action, or the invoker lacks a permission.
    PermissionDenied,
    /// The requested row, channel or object does not exist.
    NotFound,
    /// Anything else, such as configuration, scheduler, filesystem or invalid input.
    Other,
}

impl AppError {
    /// Classifies this error into an [`ErrorKind`].
    ///
    /// Discord HTTP 403 responses and model permission checks map to
    /// `PermissionDenied`, HTTP 404 maps to `NotFound`. `DbErr::RecordNotFound`
    /// maps to `NotFound` and every other database error to `StoreUnavailable`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DbErr(sea_orm::DbErr::RecordNotFound(_)) => ErrorKind::NotFound,
            Self::DbErr(_) => ErrorKind::StoreUnavailable,
            Self::DiscordErr(err) => match err.as_ref() {
                serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                    match response.status_code.as_u16() {
                        403 => ErrorKind::PermissionDenied,
                        404 => ErrorKind::NotFound,
                        _ => ErrorKind::Other,
                    }
                }
                serenity::Error::Model(ModelError::InvalidPermissions { .. }) => {
                    ErrorKind::PermissionDenied
                }
                _ => ErrorKind::Other,
            },
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::ConfigErr(_)
            | Self::ExtensionErr(_)
            | Self::LocaleErr(_)
            | Self::SchedulerErr(_)
            | Self::IoErr(_)
            | Self::BadRequest(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_is_not_found() {
        let err = AppError::from(sea_orm::DbErr::RecordNotFound("guild_config".to_string()));

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn other_database_errors_are_store_unavailable() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk I/O error".to_string()));

        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
    }

    #[test]
    fn explicit_variants_keep_their_kind() {
        assert_eq!(
            AppError::PermissionDenied("Send Messages".to_string()).kind(),
            ErrorKind::PermissionDenied
        );
        assert_eq!(
            AppError::NotFound("channel".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AppError::BadRequest("bad id".to_string()).kind(),
            ErrorKind::Other
        );
    }

    #[test]
    fn missing_env_var_is_other() {
        let err = AppError::from(ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()));

        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DISCORD_TOKEN"
        );
    }
}
