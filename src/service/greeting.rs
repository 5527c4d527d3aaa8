//! Join and leave announcements.
//!
//! Templates support two placeholders: `{user}` and `{server}`. Everything else in a
//! template is posted as written.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, Member, Mentionable, User},
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    model::guild_config::{JoinSettings, LeaveSettings},
};

pub const DEFAULT_JOIN_MESSAGE: &str = "Welcome {user} to **{server}**! 🍵";
pub const DEFAULT_LEAVE_MESSAGE: &str = "**{user}** has left the server. 👋";

pub const JOIN_COLOUR: u32 = 0xF4A261;
pub const LEAVE_COLOUR: u32 = 0x808080;

/// Substitutes `{user}` and `{server}` in a template.
pub fn render_template(template: &str, user: &str, server: &str) -> String {
    template.replace("{user}", user).replace("{server}", server)
}

/// Join text for a member; an absent or empty template selects the default.
pub fn join_text(template: Option<&str>, user_mention: &str, server: &str) -> String {
    let template = template
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_JOIN_MESSAGE);

    render_template(template, user_mention, server)
}

/// Leave text for a user; an absent or empty template selects the default.
pub fn leave_text(template: Option<&str>, user_tag: &str, server: &str) -> String {
    let template = template
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_LEAVE_MESSAGE);

    render_template(template, user_tag, server)
}

fn announcement_embed(text: String, colour: u32, avatar_url: String) -> CreateEmbed {
    CreateEmbed::new()
        .description(text)
        .colour(colour)
        .thumbnail(avatar_url)
}

/// Join embed; the thumbnail prefers the member's server avatar.
pub fn join_embed(template: Option<&str>, member: &Member, server: &str) -> CreateEmbed {
    let text = join_text(template, &member.mention().to_string(), server);

    announcement_embed(text, JOIN_COLOUR, member.face())
}

/// Leave embed; uses the server avatar when the departed member was still cached.
pub fn leave_embed(
    template: Option<&str>,
    user: &User,
    member: Option<&Member>,
    server: &str,
) -> CreateEmbed {
    let text = leave_text(template, &user.tag(), server);
    let avatar_url = member.map(Member::face).unwrap_or_else(|| user.face());

    announcement_embed(text, LEAVE_COLOUR, avatar_url)
}

pub struct GreetingService {
    http: Arc<Http>,
}

impl GreetingService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Posts the join announcement for a member.
    ///
    /// # Returns
    /// - `Ok(true)`: Announcement posted
    /// - `Ok(false)`: The guild has no join channel
    /// - `Err(AppError::DiscordErr)`: Discord refused the message
    pub async fn send_join(
        &self,
        settings: &JoinSettings,
        member: &Member,
        server: &str,
    ) -> Result<bool, AppError> {
        let Some(channel_id) = settings.channel_id else {
            return Ok(false);
        };

        let embed = join_embed(settings.message.as_deref(), member, server);

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(true)
    }

    /// Posts the leave announcement for a user. Returns `false` without a leave channel.
    pub async fn send_leave(
        &self,
        settings: &LeaveSettings,
        user: &User,
        member: Option<&Member>,
        server: &str,
    ) -> Result<bool, AppError> {
        let Some(channel_id) = settings.channel_id else {
            return Ok(false);
        };

        let embed = leave_embed(settings.message.as_deref(), user, member, server);

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::TestMemberBuilder;

    fn thumbnail_url(embed: &CreateEmbed) -> String {
        let value = serde_json::to_value(embed).unwrap();
        value["thumbnail"]["url"].as_str().unwrap().to_string()
    }

    /// Tests the join thumbnail of a member with a server avatar.
    ///
    /// Expected: the per-guild avatar url, not the account avatar
    #[test]
    fn join_thumbnail_prefers_server_avatar() {
        let member = TestMemberBuilder::new(10, 20, "rose")
            .avatar(Some("abc"))
            .guild_avatar(Some("def"))
            .build();

        let embed = join_embed(None, &member, "Test");
        let url = thumbnail_url(&embed);

        assert!(url.contains("/guilds/10/users/20/avatars/def"), "{}", url);
    }

    #[test]
    fn join_thumbnail_falls_back_to_account_avatar() {
        let member = TestMemberBuilder::new(10, 20, "rose")
            .avatar(Some("abc"))
            .build();

        let url = thumbnail_url(&join_embed(None, &member, "Test"));

        assert!(url.contains("/avatars/20/abc"), "{}", url);
    }

    /// Tests the leave thumbnail with and without cached member data.
    ///
    /// Expected: server avatar when the member is known, account avatar otherwise
    #[test]
    fn leave_thumbnail_uses_member_when_cached() {
        let member = TestMemberBuilder::new(10, 20, "rose")
            .avatar(Some("abc"))
            .guild_avatar(Some("def"))
            .build();

        let cached = thumbnail_url(&leave_embed(None, &member.user, Some(&member), "Test"));
        let uncached = thumbnail_url(&leave_embed(None, &member.user, None, "Test"));

        assert!(cached.contains("/guilds/10/users/20/avatars/def"), "{}", cached);
        assert!(uncached.contains("/avatars/20/abc"), "{}", uncached);
    }

    #[test]
    fn renders_both_placeholders() {
        let text = render_template("Hi {user}, welcome to {server}!", "<@123>", "Test");

        assert_eq!(text, "Hi <@123>, welcome to Test!");
    }

    #[test]
    fn renders_repeated_placeholders() {
        let text = render_template("{user} {user} @ {server}", "<@1>", "S");

        assert_eq!(text, "<@1> <@1> @ S");
    }

    #[test]
    fn leaves_unknown_placeholders_alone() {
        let text = render_template("{member} joined {server} {}", "<@1>", "S");

        assert_eq!(text, "{member} joined S {}");
    }

    #[test]
    fn join_falls_back_to_default() {
        assert_eq!(
            join_text(None, "<@123>", "Test"),
            "Welcome <@123> to **Test**! 🍵"
        );
        assert_eq!(
            join_text(Some("   "), "<@123>", "Test"),
            "Welcome <@123> to **Test**! 🍵"
        );
    }

    #[test]
    fn leave_falls_back_to_default() {
        assert_eq!(
            leave_text(None, "rose#0001", "Test"),
            "**rose#0001** has left the server. 👋"
        );
    }

    #[test]
    fn custom_template_wins() {
        assert_eq!(
            leave_text(Some("Bye {user} from {server}"), "rose", "Test"),
            "Bye rose from Test"
        );
    }
}
