//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are built by deserializing JSON shaped like a gateway `GUILD_CREATE`
//! payload, so the resulting struct is exactly what the event handler would see.

use serenity::all::Guild;

/// Owner assigned to every fixture guild.
pub const TEST_OWNER_ID: u64 = 100000000000000000;

/// System channel assigned to fixture guilds unless overridden.
pub const TEST_SYSTEM_CHANNEL_ID: u64 = 200000000000000000;

/// Builder for a Serenity `Guild` fixture.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::serenity::guild::TestGuildBuilder;
///
/// let guild = TestGuildBuilder::new(123456789, "Test Guild")
///     .icon_hash(Some("abc123"))
///     .member_count(42)
///     .system_channel(None)
///     .build();
/// ```
pub struct TestGuildBuilder {
    guild_id: u64,
    name: String,
    icon_hash: Option<String>,
    member_count: u64,
    system_channel_id: Option<u64>,
}

impl TestGuildBuilder {
    /// Starts a guild fixture with 100 members, no icon and the default system channel.
    pub fn new(guild_id: u64, name: &str) -> Self {
        Self {
            guild_id,
            name: name.to_string(),
            icon_hash: None,
            member_count: 100,
            system_channel_id: Some(TEST_SYSTEM_CHANNEL_ID),
        }
    }

    /// Sets the icon hash, padded to Discord's 32 hex characters (34 for animated `a_` icons).
    pub fn icon_hash(mut self, icon_hash: Option<&str>) -> Self {
        self.icon_hash = icon_hash.map(|hash| {
            let width = if hash.starts_with("a_") { 34 } else { 32 };
            format!("{:0<width$}", hash, width = width)
        });
        self
    }

    /// Sets the approximate member count.
    pub fn member_count(mut self, member_count: u64) -> Self {
        self.member_count = member_count;
        self
    }

    /// Sets or clears the system channel.
    pub fn system_channel(mut self, channel_id: Option<u64>) -> Self {
        self.system_channel_id = channel_id;
        self
    }

    /// Deserializes the fixture into a `Guild`.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
    pub fn build(self) -> Guild {
        serde_json::from_value(serde_json::json!({
            "id": self.guild_id.to_string(),
            "name": self.name,
            "icon": self.icon_hash,
            "icon_hash": self.icon_hash,
            "owner_id": TEST_OWNER_ID.to_string(),
            "afk_timeout": 300,
            "verification_level": 0,
            "default_message_notifications": 0,
            "explicit_content_filter": 0,
            "roles": [],
            "emojis": [],
            "stickers": [],
            "features": [],
            "mfa_level": 0,
            "system_channel_id": self.system_channel_id.map(|id| id.to_string()),
            "system_channel_flags": 0,
            "premium_tier": 0,
            "premium_subscription_count": 0,
            "premium_progress_bar_enabled": false,
            "preferred_locale": "en-US",
            "nsfw_level": 0,
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "large": false,
            "member_count": self.member_count,
            "voice_states": [],
            "channels": [],
            "threads": [],
            "presences": [],
            "max_presences": 25000,
            "max_members": 100000,
            "unavailable": false,
            "members": [],
            "stage_instances": [],
            "guild_scheduled_events": [],
        }))
        .expect("Failed to create test guild - invalid JSON structure")
    }
}

/// Creates a test guild with the given id, name and optional icon.
///
/// Shorthand for `TestGuildBuilder::new(guild_id, name).icon_hash(icon_hash).build()`.
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    TestGuildBuilder::new(guild_id, name)
        .icon_hash(icon_hash)
        .build()
}
