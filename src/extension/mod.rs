//! Command extensions.
//!
//! An extension contributes a group of poise commands under one name. Extensions are loaded
//! one at a time; an extension that fails is logged and skipped while the rest still load.

pub mod general;
pub mod invites;
pub mod premium;
pub mod settings;

use poise::CreateReply;
use sea_orm::DatabaseConnection;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    config::Config,
    error::{extension::ExtensionError, AppError, ErrorKind},
    locale::{L10n, Lang, Locales},
    service::{guild_config::GuildConfigService, premium::PremiumCache},
};

/// State shared with every command invocation.
pub struct Data {
    pub db: DatabaseConnection,
    pub premium: PremiumCache,
    pub config: Config,
    pub locales: Arc<Locales>,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;
pub type Command = poise::Command<Data, AppError>;

/// A named group of commands.
pub trait Extension: Send + Sync {
    fn name(&self) -> &'static str;

    /// Builds the extension's commands.
    ///
    /// Returns [`ExtensionError::MissingSetting`] when the configuration lacks something the
    /// extension needs.
    fn commands(&self, config: &Config) -> Result<Vec<Command>, ExtensionError>;
}

/// Extensions shipped with the bot, in load order.
pub fn builtin_extensions() -> Vec<Box<dyn Extension>> {
    vec![
        Box::new(general::General),
        Box::new(settings::Settings),
        Box::new(premium::Premium),
        Box::new(invites::Invites),
    ]
}

/// Result of loading a list of extensions.
#[derive(Default)]
pub struct LoadReport {
    pub loaded: Vec<&'static str>,
    pub failed: Vec<(&'static str, ExtensionError)>,
    /// Commands of every loaded extension, each tagged with its extension as category.
    pub commands: Vec<Command>,
}

/// Loads every extension in order, skipping the ones that fail.
///
/// An extension fails when building its commands fails, or when one of its command names
/// was already registered by an earlier extension. A failed extension contributes no
/// commands at all.
pub fn load_extensions(extensions: Vec<Box<dyn Extension>>, config: &Config) -> LoadReport {
    let mut report = LoadReport::default();
    let mut owners: HashMap<String, &'static str> = HashMap::new();

    for extension in extensions {
        let name = extension.name();

        match extension
            .commands(config)
            .and_then(|commands| claim_names(name, commands, &owners))
        {
            Ok(commands) => {
                for command in &commands {
                    owners.insert(command.name.clone(), name);
                }
                report.commands.extend(commands);
                report.loaded.push(name);
                tracing::debug!("Loaded extension {}", name);
            }
            Err(e) => {
                tracing::error!("Failed to load extension {}: {}", name, e);
                report.failed.push((name, e));
            }
        }
    }

    tracing::info!(
        "Loaded {}/{} extensions ({} commands)",
        report.loaded.len(),
        report.loaded.len() + report.failed.len(),
        report.commands.len()
    );

    report
}

fn claim_names(
    extension: &'static str,
    mut commands: Vec<Command>,
    owners: &HashMap<String, &'static str>,
) -> Result<Vec<Command>, ExtensionError> {
    let mut own: HashSet<&str> = HashSet::new();

    for command in &commands {
        if let Some(owner) = owners.get(&command.name) {
            return Err(ExtensionError::DuplicateCommand {
                command: command.name.clone(),
                owner: owner.to_string(),
            });
        }
        if !own.insert(command.name.as_str()) {
            return Err(ExtensionError::DuplicateCommand {
                command: command.name.clone(),
                owner: extension.to_string(),
            });
        }
    }

    for command in &mut commands {
        command.category = Some(extension.to_string());
    }

    Ok(commands)
}

/// Guild of the invocation, for commands registered as guild only.
pub fn require_guild(ctx: Context<'_>) -> Result<u64, AppError> {
    ctx.guild_id()
        .map(|id| id.get())
        .ok_or_else(|| AppError::BadRequest(ctx.data().locales.get(Lang::En).t("guild-only")))
}

/// Translator in the guild's language; English outside guilds.
pub async fn reply_l10n(ctx: Context<'_>) -> L10n<'_> {
    let lang = match ctx.guild_id() {
        Some(guild_id) => {
            let code = GuildConfigService::new(&ctx.data().db)
                .get_lang(guild_id.get())
                .await;
            Lang::from_code(&code)
        }
        None => Lang::En,
    };

    ctx.data().locales.get(lang)
}

/// Framework error hook.
///
/// Command errors are logged by kind and answered with a short ephemeral reply. Everything
/// else goes to poise's default handler.
pub async fn on_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let command = ctx.command().qualified_name.clone();
            match error.kind() {
                ErrorKind::StoreUnavailable => {
                    tracing::error!("Command {} failed: {}", command, error)
                }
                _ => tracing::warn!("Command {} failed: {}", command, error),
            }

            let content = match &error {
                AppError::BadRequest(message) => message.clone(),
                AppError::ExtensionErr(_) | AppError::NotFound(_) => error.to_string(),
                _ => reply_l10n(ctx).await.t("command-failed"),
            };

            if let Err(e) = ctx
                .send(CreateReply::default().content(content).ephemeral(true))
                .await
            {
                tracing::warn!("Failed to send error reply for {}: {}", command, e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}
