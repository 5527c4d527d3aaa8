use serenity::all::RichInvite;

/// An invite as currently reported by Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveInvite {
    pub code: String,
    pub uses: u64,
    /// Creator of the invite, `None` for vanity or widget invites.
    pub inviter_id: Option<u64>,
}

impl LiveInvite {
    pub fn new(code: impl Into<String>, uses: u64, inviter_id: Option<u64>) -> Self {
        Self {
            code: code.into(),
            uses,
            inviter_id,
        }
    }
}

impl From<&RichInvite> for LiveInvite {
    fn from(invite: &RichInvite) -> Self {
        Self {
            code: invite.code.clone(),
            uses: invite.uses,
            inviter_id: invite.inviter.as_ref().map(|user| user.id.get()),
        }
    }
}

/// Result of one invite tracking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InviteTrackOutcome {
    /// Invites whose use count increased and whose stat row was upserted.
    pub stat_upserts: usize,
    /// Cache rows written, one per live invite.
    pub cache_writes: usize,
}

/// Total uses attributed to one inviter within a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviterTotal {
    /// Inviter user id; `0` collects uses from invites without a known inviter.
    pub inviter_id: u64,
    pub uses: u64,
}
