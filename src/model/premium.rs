use std::collections::HashSet;

/// Snapshot of the premium membership sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PremiumSets {
    pub guilds: HashSet<u64>,
    pub users: HashSet<u64>,
}
