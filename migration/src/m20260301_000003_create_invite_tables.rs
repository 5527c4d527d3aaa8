use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InviteCache::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InviteCache::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(big_integer(InviteCache::Uses))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InviteStats::Table)
                    .if_not_exists()
                    .col(big_integer(InviteStats::GuildId))
                    .col(string(InviteStats::Code))
                    .col(big_integer(InviteStats::InviterId))
                    .col(big_integer(InviteStats::Uses))
                    .primary_key(
                        Index::create()
                            .col(InviteStats::GuildId)
                            .col(InviteStats::Code),
                    )
                    .to_owned(),
            )
            .await?;

        // Leaderboards aggregate per inviter within a guild
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_invite_stats_guild_inviter")
                    .table(InviteStats::Table)
                    .col(InviteStats::GuildId)
                    .col(InviteStats::InviterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_invite_stats_guild_inviter")
                    .table(InviteStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InviteStats::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InviteCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InviteCache {
    Table,
    Code,
    Uses,
}

#[derive(DeriveIden)]
enum InviteStats {
    Table,
    GuildId,
    Code,
    InviterId,
    Uses,
}
