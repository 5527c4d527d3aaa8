/// Language used when a guild has no stored preference.
pub const DEFAULT_LANG: &str = "en";

/// A guild's configuration with ids converted to `u64`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfigParam {
    pub guild_id: u64,
    /// Stored language code, `None` when never set.
    pub lang: Option<String>,
    pub join_channel_id: Option<u64>,
    pub join_message: Option<String>,
    pub leave_channel_id: Option<u64>,
    pub leave_message: Option<String>,
    pub invite_tracking: bool,
}

impl GuildConfigParam {
    /// Converts an entity model to a param model at the repository boundary.
    pub fn from_entity(entity: entity::guild_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            lang: entity.lang,
            join_channel_id: entity.join_channel_id.map(|id| id as u64),
            join_message: entity.join_message,
            leave_channel_id: entity.leave_channel_id.map(|id| id as u64),
            leave_message: entity.leave_message,
            invite_tracking: entity.invite_tracking,
        }
    }

    /// Settings needed to greet a joining member.
    pub fn join_settings(&self) -> JoinSettings {
        JoinSettings {
            channel_id: self.join_channel_id,
            message: self.join_message.clone(),
            invite_tracking: self.invite_tracking,
        }
    }

    /// Settings needed to announce a leaving member.
    pub fn leave_settings(&self) -> LeaveSettings {
        LeaveSettings {
            channel_id: self.leave_channel_id,
            message: self.leave_message.clone(),
        }
    }
}

/// Join announcement settings of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinSettings {
    pub channel_id: Option<u64>,
    /// Custom template; `None` selects the default welcome text.
    pub message: Option<String>,
    pub invite_tracking: bool,
}

/// Leave announcement settings of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveSettings {
    pub channel_id: Option<u64>,
    /// Custom template; `None` selects the default farewell text.
    pub message: Option<String>,
}

/// Partial update of a guild's configuration.
///
/// `None` leaves a column untouched; `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGuildConfigParam {
    pub lang: Option<String>,
    pub join_channel_id: Option<Option<u64>>,
    pub join_message: Option<Option<String>>,
    pub leave_channel_id: Option<Option<u64>>,
    pub leave_message: Option<Option<String>>,
    pub invite_tracking: Option<bool>,
}
