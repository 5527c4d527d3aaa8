//! Test factory for creating Serenity Member objects.
//!
//! Members are deserialized from JSON shaped like a gateway `GUILD_MEMBER_ADD` payload.

use serenity::all::Member;

/// Builder for a Serenity `Member` fixture.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::serenity::member::TestMemberBuilder;
///
/// let member = TestMemberBuilder::new(123456789, 42, "rose")
///     .avatar(Some("abc123"))
///     .guild_avatar(Some("def456"))
///     .build();
/// ```
pub struct TestMemberBuilder {
    guild_id: u64,
    user_id: u64,
    username: String,
    avatar: Option<String>,
    guild_avatar: Option<String>,
}

fn pad_hash(hash: &str) -> String {
    format!("{:0<32}", hash)
}

impl TestMemberBuilder {
    /// Starts a member fixture without avatars.
    pub fn new(guild_id: u64, user_id: u64, username: &str) -> Self {
        Self {
            guild_id,
            user_id,
            username: username.to_string(),
            avatar: None,
            guild_avatar: None,
        }
    }

    /// Sets the account avatar hash, padded to 32 hex characters.
    pub fn avatar(mut self, hash: Option<&str>) -> Self {
        self.avatar = hash.map(pad_hash);
        self
    }

    /// Sets the per-guild avatar hash, padded to 32 hex characters.
    pub fn guild_avatar(mut self, hash: Option<&str>) -> Self {
        self.guild_avatar = hash.map(pad_hash);
        self
    }

    /// Deserializes the fixture into a `Member`.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
    pub fn build(self) -> Member {
        serde_json::from_value(serde_json::json!({
            "user": {
                "id": self.user_id.to_string(),
                "username": self.username,
                "discriminator": "0",
                "global_name": null,
                "avatar": self.avatar,
                "bot": false,
            },
            "nick": null,
            "avatar": self.guild_avatar,
            "roles": [],
            "joined_at": "2024-01-01T00:00:00.000000+00:00",
            "premium_since": null,
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
            "communication_disabled_until": null,
            "guild_id": self.guild_id.to_string(),
        }))
        .expect("Failed to create test member - invalid JSON structure")
    }
}
