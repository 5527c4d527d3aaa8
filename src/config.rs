use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/rose.db?mode=rwc";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_PREMIUM_REFRESH_CRON: &str = "0 */10 * * * *";

/// Process configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    /// Directory holding the SQLite file; created before connecting.
    pub data_dir: PathBuf,

    /// Guild where commands are registered for immediate availability.
    pub support_guild_id: Option<u64>,
    /// Operator channel receiving guild join/leave embeds.
    pub guild_log_channel_id: Option<u64>,

    pub command_prefix: String,
    pub premium_refresh_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Snowflake variables set to `0` are
    /// treated as disabled.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Ok(Self {
            discord_token: var("DISCORD_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            data_dir: var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            support_guild_id: parse_snowflake("SUPPORT_GUILD_ID", var("SUPPORT_GUILD_ID"))?,
            guild_log_channel_id: parse_snowflake(
                "GUILD_LOG_CHANNEL_ID",
                var("GUILD_LOG_CHANNEL_ID"),
            )?,
            command_prefix: var("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            premium_refresh_cron: var("PREMIUM_REFRESH_CRON")
                .unwrap_or_else(|| DEFAULT_PREMIUM_REFRESH_CRON.to_string()),
        })
    }
}

fn parse_snowflake(name: &str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(id) => Ok(Some(id)),
        Err(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "token")])).unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.support_guild_id, None);
        assert_eq!(config.guild_log_channel_id, None);
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.premium_refresh_cron, DEFAULT_PREMIUM_REFRESH_CRON);
    }

    #[test]
    fn requires_token() {
        let result = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_TOKEN"
        ));
    }

    #[test]
    fn parses_snowflakes() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SUPPORT_GUILD_ID", "1435"),
            ("GUILD_LOG_CHANNEL_ID", "1111"),
        ]))
        .unwrap();

        assert_eq!(config.support_guild_id, Some(1435));
        assert_eq!(config.guild_log_channel_id, Some(1111));
    }

    #[test]
    fn zero_disables_log_channel() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("GUILD_LOG_CHANNEL_ID", "0"),
        ]))
        .unwrap();

        assert_eq!(config.guild_log_channel_id, None);
    }

    #[test]
    fn rejects_invalid_snowflake() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SUPPORT_GUILD_ID", "not-a-number"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "SUPPORT_GUILD_ID"
        ));
    }
}
