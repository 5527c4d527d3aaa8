use super::*;

/// Tests loading the sets from empty tables.
///
/// Expected: Ok with both sets empty
#[tokio::test]
async fn returns_empty_sets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumGuild)
        .with_table(entity::prelude::PremiumUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sets = PremiumRepository::new(db).get_sets().await?;

    assert!(sets.guilds.is_empty());
    assert!(sets.users.is_empty());

    Ok(())
}

/// Tests loading guild and user grants.
///
/// Expected: each id lands in its own set
#[tokio::test]
async fn loads_guilds_and_users_separately() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PremiumGuild)
        .with_table(entity::prelude::PremiumUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_premium_guild(db, 1).await?;
    factory::create_premium_guild(db, 2).await?;
    factory::create_premium_user(db, 3).await?;

    let sets = PremiumRepository::new(db).get_sets().await?;

    assert_eq!(sets.guilds.len(), 2);
    assert!(sets.guilds.contains(&1));
    assert!(sets.guilds.contains(&2));
    assert_eq!(sets.users.len(), 1);
    assert!(sets.users.contains(&3));

    Ok(())
}

/// Tests loading when a table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_tables() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PremiumRepository::new(db).get_sets().await.is_err());
}
