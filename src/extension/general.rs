use fluent::FluentArgs;
use poise::{
    serenity_prelude::{CreateEmbed, CreateEmbedFooter},
    CreateReply,
};

use super::{reply_l10n, Command, Context, Extension};
use crate::{
    config::Config,
    error::{extension::ExtensionError, AppError},
    model::guild_log::WELCOME_COLOUR,
};

pub struct General;

impl Extension for General {
    fn name(&self) -> &'static str {
        "general"
    }

    fn commands(&self, _config: &Config) -> Result<Vec<Command>, ExtensionError> {
        Ok(vec![help()])
    }
}

/// List every command
#[poise::command(slash_command, prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), AppError> {
    let l10n = reply_l10n(ctx).await;
    let text = help_text(&ctx.framework().options().commands);

    let mut args = FluentArgs::new();
    args.set("prefix", ctx.data().config.command_prefix.as_str());

    let embed = CreateEmbed::new()
        .title(l10n.t("help-title"))
        .description(text)
        .colour(WELCOME_COLOUR)
        .footer(CreateEmbedFooter::new(l10n.t_args("help-footer", &args)));

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Commands grouped by extension, in load order, with subcommands spelled out.
pub fn help_text(commands: &[Command]) -> String {
    let mut groups: Vec<(&str, Vec<String>)> = Vec::new();

    for command in commands {
        let category = command.category.as_deref().unwrap_or("other");
        let index = match groups.iter().position(|(name, _)| *name == category) {
            Some(index) => index,
            None => {
                groups.push((category, Vec::new()));
                groups.len() - 1
            }
        };

        push_command_lines(&mut groups[index].1, command, "");
    }

    groups
        .into_iter()
        .map(|(name, lines)| format!("**{}**\n{}", name, lines.join("\n")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn push_command_lines(lines: &mut Vec<String>, command: &Command, parent: &str) {
    let path = format!("{}{}", parent, command.name);

    if command.subcommands.is_empty() {
        match &command.description {
            Some(description) => lines.push(format!("`/{}` {}", path, description)),
            None => lines.push(format!("`/{}`", path)),
        }
        return;
    }

    for subcommand in &command.subcommands {
        push_command_lines(lines, subcommand, &format!("{} ", path));
    }
}
