use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, Context, GatewayIntents, GuildId};

use crate::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    extension::{builtin_extensions, load_extensions, on_error, Command, Data},
    locale::Locales,
    service::premium::PremiumCache,
};

/// Gateway events the bot subscribes to.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_INVITES
}

/// Starts the Discord bot and runs until the gateway connection ends.
///
/// Loads the translations and extensions, builds the poise framework around their commands and attaches the
/// lifecycle event handler. Slash commands are registered once the framework is ready.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection shared by handlers and commands
/// - `premium` - Premium cache shared with the refresh job
///
/// # Returns
/// - `Ok(())` if the client shuts down cleanly
/// - `Err(AppError)` if the translations fail to parse, client initialization fails or the
///   gateway connection fails
pub async fn start_bot(
    config: Config,
    db: DatabaseConnection,
    premium: PremiumCache,
) -> Result<(), AppError> {
    let locales = Arc::new(Locales::load()?);
    let report = load_extensions(builtin_extensions(), &config);
    for (name, error) in &report.failed {
        tracing::warn!("Extension {} is unavailable: {}", name, error);
    }

    let data = Data {
        db: db.clone(),
        premium: premium.clone(),
        config: config.clone(),
        locales,
    };
    let support_guild_id = config.support_guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: report.commands,
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                register_commands(ctx, &framework.options().commands, support_guild_id).await?;
                Ok(data)
            })
        })
        .build();

    let handler = Handler::new(db, premium, config.clone());

    let mut client = Client::builder(&config.discord_token, intents())
        .framework(framework)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

/// Registers slash commands in the support guild when configured, globally otherwise.
///
/// Guild registration is visible immediately; global registration can take up to an hour.
async fn register_commands(
    ctx: &Context,
    commands: &[Command],
    support_guild_id: Option<u64>,
) -> Result<(), AppError> {
    match support_guild_id {
        Some(guild_id) => {
            poise::builtins::register_in_guild(ctx, commands, GuildId::new(guild_id)).await?;
            tracing::info!(
                "Registered {} commands in guild {}",
                commands.len(),
                guild_id
            );
        }
        None => {
            poise::builtins::register_globally(ctx, commands).await?;
            tracing::info!("Registered {} commands globally", commands.len());
        }
    }

    Ok(())
}
