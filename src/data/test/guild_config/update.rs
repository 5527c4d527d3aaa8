use super::*;

/// Tests updating a guild that has no row yet.
///
/// Expected: row created with only the language set
#[tokio::test]
async fn creates_row_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .update(
            99,
            UpdateGuildConfigParam {
                lang: Some("nl".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(config.guild_id, 99);
    assert_eq!(config.lang.as_deref(), Some("nl"));
    assert!(!config.invite_tracking);

    Ok(())
}

/// Tests that a partial update leaves other columns untouched.
///
/// Expected: leave settings updated, join settings and language preserved
#[tokio::test]
async fn preserves_untouched_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(10)
        .lang(Some("nl"))
        .join_channel(Some(11), Some("Hi {user}"))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .update(
            10,
            UpdateGuildConfigParam {
                leave_channel_id: Some(Some(12)),
                leave_message: Some(Some("Bye {user}".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(config.lang.as_deref(), Some("nl"));
    assert_eq!(config.join_channel_id, Some(11));
    assert_eq!(config.join_message.as_deref(), Some("Hi {user}"));
    assert_eq!(config.leave_channel_id, Some(12));
    assert_eq!(config.leave_message.as_deref(), Some("Bye {user}"));

    Ok(())
}

/// Tests clearing a nullable column.
///
/// Expected: join channel and message reset to null
#[tokio::test]
async fn clears_nullable_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(20)
        .join_channel(Some(21), Some("Hi"))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .update(
            20,
            UpdateGuildConfigParam {
                join_channel_id: Some(None),
                join_message: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(config.join_channel_id, None);
    assert_eq!(config.join_message, None);

    Ok(())
}

/// Tests enabling invite tracking on one guild.
///
/// Expected: only the updated guild has tracking enabled
#[tokio::test]
async fn toggles_invite_tracking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.insert_default(30).await?;
    let config = repo
        .update(
            31,
            UpdateGuildConfigParam {
                invite_tracking: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(config.invite_tracking);
    assert!(!repo.find_by_guild_id(30).await?.unwrap().invite_tracking);

    Ok(())
}

/// Tests an update that changes nothing.
///
/// Expected: Ok with the row created and left at defaults
#[tokio::test]
async fn empty_update_returns_current_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.update(40, UpdateGuildConfigParam::default()).await?;

    assert_eq!(config.guild_id, 40);
    assert_eq!(config.lang, None);

    Ok(())
}
