use super::*;

/// Tests inserting a default config for a guild without one.
///
/// Expected: Ok(true) with a row holding null settings and tracking disabled
#[tokio::test]
async fn inserts_default_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let inserted = repo.insert_default(123456789).await?;

    assert!(inserted);
    let config = repo.find_by_guild_id(123456789).await?.unwrap();
    assert_eq!(config.lang, None);
    assert_eq!(config.join_channel_id, None);
    assert_eq!(config.leave_message, None);
    assert!(!config.invite_tracking);

    Ok(())
}

/// Tests that joining the same guild twice keeps a single row.
///
/// Expected: Ok(false) on the second insert and exactly one row
#[tokio::test]
async fn ignores_duplicate_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    assert!(repo.insert_default(123456789).await?);
    assert!(!repo.insert_default(123456789).await?);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an existing configuration survives a rejoin.
///
/// Expected: stored language and channel are unchanged
#[tokio::test]
async fn keeps_existing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(42)
        .lang(Some("nl"))
        .join_channel(Some(7), Some("Hoi {user}"))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    repo.insert_default(42).await?;

    let config = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(config.lang.as_deref(), Some("nl"));
    assert_eq!(config.join_channel_id, Some(7));
    assert_eq!(config.join_message.as_deref(), Some("Hoi {user}"));

    Ok(())
}

/// Tests that the migrated schema accepts the default row.
///
/// Expected: Ok(true) against the production migrations
#[tokio::test]
async fn inserts_with_migrated_schema() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(repo.insert_default(555).await?);
    assert!(repo.find_by_guild_id(555).await?.is_some());

    Ok(())
}
