use super::*;

/// Tests revoking premium from a premium guild.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn revokes_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_premium_guild(db, 5).await?;

    let removed = PremiumRepository::new(db).revoke_guild(5).await?;

    assert!(removed);
    assert_eq!(entity::prelude::PremiumGuild::find().count(db).await?, 0);

    Ok(())
}

/// Tests revoking premium from a guild that never had it.
///
/// Expected: Ok(false)
#[tokio::test]
async fn revoke_missing_guild_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PremiumRepository::new(db).revoke_guild(5).await?);

    Ok(())
}

/// Tests revoking premium from one user leaves other users alone.
///
/// Expected: Ok(true) and one remaining row
#[tokio::test]
async fn revokes_only_target_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_premium_user(db, 1).await?;
    factory::create_premium_user(db, 2).await?;

    assert!(PremiumRepository::new(db).revoke_user(1).await?);

    let remaining = entity::prelude::PremiumUser::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, 2);

    Ok(())
}
