//! Per-guild configuration commands, restricted to members with Manage Server.

use fluent::FluentArgs;
use poise::{
    serenity_prelude::{CreateEmbed, GuildChannel, Mentionable},
    CreateReply,
};

use super::{reply_l10n, require_guild, Command, Context, Extension};
use crate::{
    config::Config,
    error::{extension::ExtensionError, AppError},
    locale::Lang,
    model::{guild_config::UpdateGuildConfigParam, guild_log::WELCOME_COLOUR},
    service::{guild_config::GuildConfigService, invite_tracker::InviteTrackerService},
};

pub struct Settings;

impl Extension for Settings {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn commands(&self, _config: &Config) -> Result<Vec<Command>, ExtensionError> {
        Ok(vec![settings()])
    }
}

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum LanguageChoice {
    #[name = "English"]
    English,
    #[name = "Nederlands"]
    Nederlands,
}

impl From<LanguageChoice> for Lang {
    fn from(choice: LanguageChoice) -> Self {
        match choice {
            LanguageChoice::English => Lang::En,
            LanguageChoice::Nederlands => Lang::Nl,
        }
    }
}

/// Configure the bot for this server
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    subcommands("show", "language", "welcome", "leave", "invites"),
    subcommand_required
)]
pub async fn settings(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Show the current settings
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_GUILD")]
pub async fn show(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let l10n = reply_l10n(ctx).await;
    let config = GuildConfigService::new(&ctx.data().db).get(guild_id).await?;

    let not_set = l10n.t("settings-not-set");
    let channel = |id: Option<u64>| {
        id.map(|id| format!("<#{}>", id))
            .unwrap_or_else(|| not_set.clone())
    };
    let tracking = if config.as_ref().is_some_and(|c| c.invite_tracking) {
        l10n.t("settings-enabled")
    } else {
        l10n.t("settings-disabled")
    };

    let embed = CreateEmbed::new()
        .title(l10n.t("settings-title"))
        .colour(WELCOME_COLOUR)
        .field(l10n.t("settings-language"), l10n.lang.name(), true)
        .field(
            l10n.t("settings-join-channel"),
            channel(config.as_ref().and_then(|c| c.join_channel_id)),
            true,
        )
        .field(
            l10n.t("settings-leave-channel"),
            channel(config.as_ref().and_then(|c| c.leave_channel_id)),
            true,
        )
        .field(l10n.t("settings-invite-tracking"), tracking, true);

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Set the bot's language in this server
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_GUILD")]
pub async fn language(
    ctx: Context<'_>,
    #[description = "Language for replies"] choice: LanguageChoice,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let lang = Lang::from(choice);

    GuildConfigService::new(&ctx.data().db)
        .update(
            guild_id,
            UpdateGuildConfigParam {
                lang: Some(lang.code().to_string()),
                ..Default::default()
            },
        )
        .await?;

    let mut args = FluentArgs::new();
    args.set("lang", lang.name());
    let reply = ctx.data().locales.get(lang).t_args("language-set", &args);
    ctx.send(CreateReply::default().content(reply).ephemeral(true))
        .await?;

    Ok(())
}

/// Set or clear the join message channel
///
/// Templates may use {user} for the member mention and {server} for the server name.
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_GUILD")]
pub async fn welcome(
    ctx: Context<'_>,
    #[description = "Channel for join messages, empty to disable"] channel: Option<GuildChannel>,
    #[description = "Message template"] message: Option<String>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let l10n = reply_l10n(ctx).await;

    let param = UpdateGuildConfigParam {
        join_channel_id: Some(channel.as_ref().map(|c| c.id.get())),
        join_message: Some(message),
        ..Default::default()
    };
    GuildConfigService::new(&ctx.data().db)
        .update(guild_id, param)
        .await?;

    let reply = match channel {
        Some(channel) => l10n.t_args("join-set", &channel_args(&channel)),
        None => l10n.t("join-disabled"),
    };
    ctx.send(CreateReply::default().content(reply).ephemeral(true))
        .await?;

    Ok(())
}

/// Set or clear the leave message channel
///
/// Templates may use {user} for the user's tag and {server} for the server name.
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_GUILD")]
pub async fn leave(
    ctx: Context<'_>,
    #[description = "Channel for leave messages, empty to disable"] channel: Option<GuildChannel>,
    #[description = "Message template"] message: Option<String>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let l10n = reply_l10n(ctx).await;

    let param = UpdateGuildConfigParam {
        leave_channel_id: Some(channel.as_ref().map(|c| c.id.get())),
        leave_message: Some(message),
        ..Default::default()
    };
    GuildConfigService::new(&ctx.data().db)
        .update(guild_id, param)
        .await?;

    let reply = match channel {
        Some(channel) => l10n.t_args("leave-set", &channel_args(&channel)),
        None => l10n.t("leave-disabled"),
    };
    ctx.send(CreateReply::default().content(reply).ephemeral(true))
        .await?;

    Ok(())
}

/// Turn invite tracking on or off
///
/// Turning tracking on records the current use count of every invite, so only joins after
/// this point are credited.
#[poise::command(slash_command, prefix_command, guild_only, required_permissions = "MANAGE_GUILD")]
pub async fn invites(
    ctx: Context<'_>,
    #[description = "Track which invite members join with"] enabled: bool,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let l10n = reply_l10n(ctx).await;
    let db = &ctx.data().db;

    let reply = if enabled {
        ctx.defer_ephemeral().await?;

        let live = InviteTrackerService::fetch_live(ctx.http(), guild_id).await?;
        let seeded = InviteTrackerService::new(db).seed(&live).await?;

        GuildConfigService::new(db)
            .update(
                guild_id,
                UpdateGuildConfigParam {
                    invite_tracking: Some(true),
                    ..Default::default()
                },
            )
            .await?;

        let mut args = FluentArgs::new();
        args.set("count", seeded);
        l10n.t_args("invites-enabled", &args)
    } else {
        GuildConfigService::new(db)
            .update(
                guild_id,
                UpdateGuildConfigParam {
                    invite_tracking: Some(false),
                    ..Default::default()
                },
            )
            .await?;

        l10n.t("invites-disabled")
    };

    ctx.send(CreateReply::default().content(reply).ephemeral(true))
        .await?;

    Ok(())
}

fn channel_args(channel: &GuildChannel) -> FluentArgs<'static> {
    let mut args = FluentArgs::new();
    args.set("channel", channel.mention().to_string());
    args
}
