use super::*;

/// Tests ranking inviters by summed uses.
///
/// Verifies that uses across several codes of one inviter are added up, that other
/// guilds are excluded and that the result is ordered by total descending.
///
/// Expected: [(10, 8), (20, 5)]
#[tokio::test]
async fn ranks_inviters_by_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite_stat(db, 1, "a", 10, 3).await?;
    factory::create_invite_stat(db, 1, "b", 10, 5).await?;
    factory::create_invite_stat(db, 1, "c", 20, 5).await?;
    factory::create_invite_stat(db, 2, "d", 30, 100).await?;

    let board = InviteStatRepository::new(db).get_leaderboard(1, 10).await?;

    let ranked: Vec<(u64, u64)> = board.iter().map(|t| (t.inviter_id, t.uses)).collect();
    assert_eq!(ranked, vec![(10, 8), (20, 5)]);

    Ok(())
}

/// Tests that the limit caps the number of inviters.
///
/// Expected: ties broken by lower inviter id, one entry returned
#[tokio::test]
async fn applies_limit_with_stable_ties() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite_stat(db, 1, "a", 20, 4).await?;
    factory::create_invite_stat(db, 1, "b", 10, 4).await?;

    let board = InviteStatRepository::new(db).get_leaderboard(1, 1).await?;

    assert_eq!(board.len(), 1);
    assert_eq!(board[0].inviter_id, 10);

    Ok(())
}

/// Tests the per-inviter total.
///
/// Expected: sum for a known inviter, 0 for an unknown one
#[tokio::test]
async fn totals_single_inviter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InviteStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite_stat(db, 1, "a", 10, 3).await?;
    factory::create_invite_stat(db, 1, "b", 10, 2).await?;

    let repo = InviteStatRepository::new(db);
    assert_eq!(repo.get_total_for_inviter(1, 10).await?, 5);
    assert_eq!(repo.get_total_for_inviter(1, 99).await?, 0);

    Ok(())
}
