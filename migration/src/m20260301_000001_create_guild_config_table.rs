use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GuildConfig::GuildId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_null(GuildConfig::Lang))
                    .col(big_integer_null(GuildConfig::JoinChannelId))
                    .col(text_null(GuildConfig::JoinMessage))
                    .col(big_integer_null(GuildConfig::LeaveChannelId))
                    .col(text_null(GuildConfig::LeaveMessage))
                    .col(boolean(GuildConfig::InviteTracking).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildConfig {
    Table,
    GuildId,
    Lang,
    JoinChannelId,
    JoinMessage,
    LeaveChannelId,
    LeaveMessage,
    InviteTracking,
}
