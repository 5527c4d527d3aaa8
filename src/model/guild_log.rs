use serenity::all::{CreateEmbed, CreateEmbedFooter, Guild};

pub const GUILD_JOIN_COLOUR: u32 = 0x57F287;
pub const GUILD_REMOVE_COLOUR: u32 = 0xFF4444;
pub const WELCOME_COLOUR: u32 = 0xF4A261;

/// Facts about a guild the bot was added to or removed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildLogEntry {
    pub guild_id: u64,
    pub name: String,
    pub member_count: u64,
    pub owner_id: Option<u64>,
    pub icon_url: Option<String>,
    /// Guilds the bot is in after the event.
    pub total_servers: usize,
}

impl GuildLogEntry {
    pub fn from_guild(guild: &Guild, total_servers: usize) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            member_count: guild.member_count,
            owner_id: Some(guild.owner_id.get()),
            icon_url: guild.icon_url(),
            total_servers,
        }
    }

    /// Entry for a guild that was no longer cached when the bot left it.
    pub fn unknown(guild_id: u64, total_servers: usize) -> Self {
        Self {
            guild_id,
            name: "Unknown server".to_string(),
            member_count: 0,
            owner_id: None,
            icon_url: None,
            total_servers,
        }
    }
}

/// Renderer-independent description of an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSpec {
    pub title: String,
    pub description: String,
    pub colour: u32,
    /// `(name, value, inline)`
    pub fields: Vec<(String, String, bool)>,
    pub thumbnail: Option<String>,
    pub footer: Option<String>,
}

impl EmbedSpec {
    /// Operator log embed for a guild join.
    pub fn guild_join(entry: &GuildLogEntry) -> Self {
        let owner = entry
            .owner_id
            .map(|id| format!("<@{}>", id))
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            title: "⭐ Rosé was added to a server".to_string(),
            description: format!("**{}**", entry.name),
            colour: GUILD_JOIN_COLOUR,
            fields: vec![
                ("Members".to_string(), group_thousands(entry.member_count), true),
                ("Server ID".to_string(), entry.guild_id.to_string(), true),
                ("Owner".to_string(), owner, false),
                (
                    "Total Servers".to_string(),
                    entry.total_servers.to_string(),
                    false,
                ),
            ],
            thumbnail: entry.icon_url.clone(),
            footer: None,
        }
    }

    /// Operator log embed for a guild removal.
    pub fn guild_remove(entry: &GuildLogEntry) -> Self {
        Self {
            title: "😭 Rosé was removed from a server".to_string(),
            description: format!("**{}**", entry.name),
            colour: GUILD_REMOVE_COLOUR,
            fields: vec![
                ("Server ID".to_string(), entry.guild_id.to_string(), true),
                (
                    "Total Servers".to_string(),
                    entry.total_servers.to_string(),
                    false,
                ),
            ],
            thumbnail: entry.icon_url.clone(),
            footer: None,
        }
    }

    /// Greeting posted in a guild's system channel after the bot joins.
    pub fn welcome() -> Self {
        Self {
            title: "🌸 Thanks for adding Rosé!".to_string(),
            description: "I'm your all-in-one cozy companion!\n\n\
                **Get started:**\n\
                > `/help` — see all commands\n\
                > `/settings language` — switch to Dutch or other languages 🇳🇱\n\n\
                **Links:**\n\
                > 💬 [Support Server](https://discord.com/app)\n\
                > ⭐ [Patreon (Premium)](https://patreon.com/)"
                .to_string(),
            colour: WELCOME_COLOUR,
            fields: Vec::new(),
            thumbnail: None,
            footer: Some("Rosé • discord.com".to_string()),
        }
    }

    pub fn to_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .colour(self.colour)
            .fields(self.fields.clone());

        if let Some(url) = &self.thumbnail {
            embed = embed.thumbnail(url);
        }
        if let Some(text) = &self.footer {
            embed = embed.footer(CreateEmbedFooter::new(text));
        }

        embed
    }
}

/// Formats a count with comma thousands separators, `12345` as `12,345`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
