use super::*;

/// Tests reading the language of a guild without a config row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert_eq!(repo.get_lang(1).await?, None);

    Ok(())
}

/// Tests reading a null language column.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_null_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::guild_config::GuildConfigFactory::new(db)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    assert_eq!(repo.get_lang(config.guild_id as u64).await?, None);

    Ok(())
}

/// Tests reading a stored language.
///
/// Expected: Ok(Some("nl"))
#[tokio::test]
async fn returns_stored_lang() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::guild_config::GuildConfigFactory::new(db)
        .lang(Some("nl"))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    assert_eq!(
        repo.get_lang(config.guild_id as u64).await?,
        Some("nl".to_string())
    );

    Ok(())
}

/// Tests reading the language when the table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(repo.get_lang(1).await.is_err());
}
