use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PremiumGuilds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PremiumGuilds::GuildId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(timestamp(PremiumGuilds::GrantedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PremiumUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PremiumUsers::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(timestamp(PremiumUsers::GrantedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PremiumUsers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PremiumGuilds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PremiumGuilds {
    Table,
    GuildId,
    GrantedAt,
}

#[derive(DeriveIden)]
enum PremiumUsers {
    Table,
    UserId,
    GrantedAt,
}
