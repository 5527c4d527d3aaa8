use fluent::FluentArgs;
use poise::{
    serenity_prelude::{CreateEmbed, Mentionable, User},
    CreateReply,
};

use super::{reply_l10n, require_guild, Command, Context, Extension};
use crate::{
    config::Config,
    data::invite::InviteStatRepository,
    error::{extension::ExtensionError, AppError},
    locale::L10n,
    model::{guild_log::WELCOME_COLOUR, invite::InviterTotal},
    service::{guild_config::GuildConfigService, invite_tracker::UNKNOWN_INVITER},
};

const DEFAULT_LEADERBOARD_SIZE: u64 = 10;

pub struct Invites;

impl Extension for Invites {
    fn name(&self) -> &'static str {
        "invites"
    }

    fn commands(&self, _config: &Config) -> Result<Vec<Command>, ExtensionError> {
        Ok(vec![invites()])
    }
}

/// Invite statistics
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    subcommands("leaderboard", "user"),
    subcommand_required
)]
pub async fn invites(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Top inviters of this server
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn leaderboard(
    ctx: Context<'_>,
    #[description = "Number of inviters to show"]
    #[min = 1]
    #[max = 25]
    limit: Option<u64>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let l10n = reply_l10n(ctx).await;

    if !tracking_enabled(ctx, guild_id).await? {
        return not_tracked(ctx, l10n).await;
    }

    let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_SIZE).clamp(1, 25);
    let board = InviteStatRepository::new(&ctx.data().db)
        .get_leaderboard(guild_id, limit)
        .await?;

    let embed = CreateEmbed::new()
        .title(l10n.t("leaderboard-title"))
        .description(leaderboard_text(&board, l10n))
        .colour(WELCOME_COLOUR);

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Invites credited to a member
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn user(
    ctx: Context<'_>,
    #[description = "Member to look up, defaults to you"] user: Option<User>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let l10n = reply_l10n(ctx).await;

    if !tracking_enabled(ctx, guild_id).await? {
        return not_tracked(ctx, l10n).await;
    }

    let target = user.as_ref().unwrap_or_else(|| ctx.author());
    let total = InviteStatRepository::new(&ctx.data().db)
        .get_total_for_inviter(guild_id, target.id.get())
        .await?;

    let mut args = FluentArgs::new();
    args.set("user", target.mention().to_string());
    args.set("count", total);
    let content = l10n.t_args("user-invites", &args);

    ctx.send(CreateReply::default().content(content)).await?;

    Ok(())
}

async fn tracking_enabled(ctx: Context<'_>, guild_id: u64) -> Result<bool, AppError> {
    let config = GuildConfigService::new(&ctx.data().db).get(guild_id).await?;

    Ok(config.is_some_and(|c| c.invite_tracking))
}

async fn not_tracked(ctx: Context<'_>, l10n: L10n<'_>) -> Result<(), AppError> {
    ctx.send(
        CreateReply::default()
            .content(l10n.t("invites-not-tracked"))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

/// Ranked lines for the leaderboard embed.
pub fn leaderboard_text(board: &[InviterTotal], l10n: L10n<'_>) -> String {
    if board.is_empty() {
        return l10n.t("leaderboard-empty");
    }

    board
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let rank = match index {
                0 => "🥇".to_string(),
                1 => "🥈".to_string(),
                2 => "🥉".to_string(),
                _ => format!("**#{}**", index + 1),
            };
            let inviter = if entry.inviter_id == UNKNOWN_INVITER {
                l10n.t("unknown-inviter")
            } else {
                format!("<@{}>", entry.inviter_id)
            };

            format!("{} {} · {}", rank, inviter, entry.uses)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
