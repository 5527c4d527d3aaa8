use sea_orm::entity::prelude::*;

/// Per-guild configuration row. Every column but the key is optional or defaulted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub lang: Option<String>,
    pub join_channel_id: Option<i64>,
    pub join_message: Option<String>,
    pub leave_channel_id: Option<i64>,
    pub leave_message: Option<String>,
    pub invite_tracking: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
