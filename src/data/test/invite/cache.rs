use super::*;

/// Tests reading an invite that was never cached.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteCache)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(InviteCacheRepository::new(db).get_uses("abc").await?, None);

    Ok(())
}

/// Tests that upsert inserts then overwrites the cached count.
///
/// Expected: second write replaces the first, one row total
#[tokio::test]
async fn upsert_overwrites_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteCache)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteCacheRepository::new(db);
    repo.upsert("abc", 3).await?;
    assert_eq!(repo.get_uses("abc").await?, Some(3));

    repo.upsert("abc", 5).await?;
    assert_eq!(repo.get_uses("abc").await?, Some(5));

    let count = entity::prelude::InviteCache::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests reading a factory-created cache row.
///
/// Expected: Ok(Some(uses))
#[tokio::test]
async fn reads_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteCache)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite_cache(db, "xyz", 12).await?;

    assert_eq!(InviteCacheRepository::new(db).get_uses("xyz").await?, Some(12));

    Ok(())
}
