use super::*;

/// Tests that insert_ignore creates a zero-use row.
///
/// Expected: one row with uses 0 and the given inviter
#[tokio::test]
async fn inserts_zero_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    InviteStatRepository::new(db)
        .insert_ignore(1, "abc", 42)
        .await?;

    let rows = entity::prelude::InviteStat::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].guild_id, 1);
    assert_eq!(rows[0].code, "abc");
    assert_eq!(rows[0].inviter_id, 42);
    assert_eq!(rows[0].uses, 0);

    Ok(())
}

/// Tests that insert_ignore leaves an existing row untouched.
///
/// Expected: uses keep their previous value
#[tokio::test]
async fn insert_ignore_keeps_existing_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite_stat(db, 1, "abc", 42, 7).await?;

    InviteStatRepository::new(db)
        .insert_ignore(1, "abc", 42)
        .await?;

    let rows = entity::prelude::InviteStat::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].uses, 7);

    Ok(())
}

/// Tests setting the observed count on one guild's invite.
///
/// Expected: only the matching (guild, code) row changes
#[tokio::test]
async fn set_uses_targets_guild_and_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite_stat(db, 1, "abc", 42, 0).await?;
    factory::create_invite_stat(db, 2, "abc", 42, 0).await?;

    InviteStatRepository::new(db).set_uses(1, "abc", 5).await?;

    let first = entity::prelude::InviteStat::find_by_id((1, "abc".to_string()))
        .one(db)
        .await?
        .unwrap();
    let second = entity::prelude::InviteStat::find_by_id((2, "abc".to_string()))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(first.uses, 5);
    assert_eq!(second.uses, 0);

    Ok(())
}
