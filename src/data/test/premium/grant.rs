use super::*;

/// Tests granting premium to a guild.
///
/// Expected: Ok with one premium guild row
#[tokio::test]
async fn grants_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PremiumRepository::new(db).grant_guild(123).await?;

    let row = entity::prelude::PremiumGuild::find_by_id(123).one(db).await?;
    assert!(row.is_some());

    Ok(())
}

/// Tests granting premium to a guild twice.
///
/// Expected: Ok with a single row keeping the first timestamp
#[tokio::test]
async fn grant_guild_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_premium_guild(db, 123).await?;

    PremiumRepository::new(db).grant_guild(123).await?;

    let count = entity::prelude::PremiumGuild::find().count(db).await?;
    assert_eq!(count, 1);
    let row = entity::prelude::PremiumGuild::find_by_id(123)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.granted_at, first.granted_at);

    Ok(())
}

/// Tests granting premium to a user twice.
///
/// Expected: Ok with a single row
#[tokio::test]
async fn grants_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PremiumRepository::new(db);
    repo.grant_user(77).await?;
    repo.grant_user(77).await?;

    let count = entity::prelude::PremiumUser::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
