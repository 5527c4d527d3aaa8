use fluent::FluentArgs;
use poise::{serenity_prelude::User, CreateReply};

use super::{reply_l10n, Command, Context, Extension};
use crate::{
    config::Config,
    error::{extension::ExtensionError, AppError},
};

pub struct Premium;

impl Extension for Premium {
    fn name(&self) -> &'static str {
        "premium"
    }

    fn commands(&self, _config: &Config) -> Result<Vec<Command>, ExtensionError> {
        Ok(vec![premium()])
    }
}

/// Premium status and management
#[poise::command(
    slash_command,
    prefix_command,
    subcommands("status", "grant", "revoke"),
    subcommand_required
)]
pub async fn premium(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Show whether this server and you have premium
#[poise::command(slash_command, prefix_command)]
pub async fn status(ctx: Context<'_>) -> Result<(), AppError> {
    let l10n = reply_l10n(ctx).await;
    let cache = &ctx.data().premium;
    let mut lines = Vec::new();

    if let Some(guild_id) = ctx.guild_id() {
        let key = if cache.is_premium_guild(guild_id.get()).await {
            "premium-guild-active"
        } else {
            "premium-guild-inactive"
        };
        lines.push(l10n.t(key));
    }

    let key = if cache.is_premium_user(ctx.author().id.get()).await {
        "premium-user-active"
    } else {
        "premium-user-inactive"
    };
    lines.push(l10n.t(key));

    ctx.send(
        CreateReply::default()
            .content(lines.join("\n"))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

/// Grant premium (bot owners only)
#[poise::command(
    slash_command,
    prefix_command,
    owners_only,
    subcommands("grant_guild", "grant_user"),
    subcommand_required
)]
pub async fn grant(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Revoke premium (bot owners only)
#[poise::command(
    slash_command,
    prefix_command,
    owners_only,
    subcommands("revoke_guild", "revoke_user"),
    subcommand_required
)]
pub async fn revoke(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Grant premium to a server
#[poise::command(slash_command, prefix_command, owners_only, rename = "guild")]
pub async fn grant_guild(
    ctx: Context<'_>,
    #[description = "Server ID"] guild_id: String,
) -> Result<(), AppError> {
    let guild_id = parse_guild_id(&guild_id)?;

    ctx.data().premium.grant_guild(guild_id).await?;
    tracing::info!("Premium granted to guild {} by {}", guild_id, ctx.author().id);

    reply(ctx, "premium-granted", &format!("`{}`", guild_id)).await
}

/// Grant premium to a user
#[poise::command(slash_command, prefix_command, owners_only, rename = "user")]
pub async fn grant_user(
    ctx: Context<'_>,
    #[description = "User"] user: User,
) -> Result<(), AppError> {
    ctx.data().premium.grant_user(user.id.get()).await?;
    tracing::info!("Premium granted to user {} by {}", user.id, ctx.author().id);

    reply(ctx, "premium-granted", &user.tag()).await
}

/// Revoke premium from a server
#[poise::command(slash_command, prefix_command, owners_only, rename = "guild")]
pub async fn revoke_guild(
    ctx: Context<'_>,
    #[description = "Server ID"] guild_id: String,
) -> Result<(), AppError> {
    let guild_id = parse_guild_id(&guild_id)?;
    let target = format!("`{}`", guild_id);

    if ctx.data().premium.revoke_guild(guild_id).await? {
        tracing::info!("Premium revoked from guild {} by {}", guild_id, ctx.author().id);
        reply(ctx, "premium-revoked", &target).await
    } else {
        reply(ctx, "premium-not-found", &target).await
    }
}

/// Revoke premium from a user
#[poise::command(slash_command, prefix_command, owners_only, rename = "user")]
pub async fn revoke_user(
    ctx: Context<'_>,
    #[description = "User"] user: User,
) -> Result<(), AppError> {
    if ctx.data().premium.revoke_user(user.id.get()).await? {
        tracing::info!("Premium revoked from user {} by {}", user.id, ctx.author().id);
        reply(ctx, "premium-revoked", &user.tag()).await
    } else {
        reply(ctx, "premium-not-found", &user.tag()).await
    }
}

async fn reply(ctx: Context<'_>, key: &str, target: &str) -> Result<(), AppError> {
    let mut args = FluentArgs::new();
    args.set("target", target);
    let content = reply_l10n(ctx).await.t_args(key, &args);

    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;

    Ok(())
}

/// Parses a server ID typed by an owner.
///
/// Slash command integers cannot hold a snowflake, so the ID arrives as text.
fn parse_guild_id(input: &str) -> Result<u64, AppError> {
    match input.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!(
            "'{}' is not a valid server ID",
            input
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_guild_ids() {
        assert_eq!(parse_guild_id(" 1435 ").unwrap(), 1435);
        assert!(matches!(parse_guild_id("0"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_guild_id("abc"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn management_commands_are_owner_only() {
        let command = premium();
        let grant = command
            .subcommands
            .iter()
            .find(|c| c.name == "grant")
            .unwrap();

        assert!(grant.owners_only);
        assert!(grant.subcommands.iter().all(|c| c.owners_only));
        assert!(!command.subcommands[0].owners_only);
    }
}
