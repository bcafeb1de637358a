use super::*;

/// Tests listing the sessions of one institute turn.
///
/// Verifies that sessions of other turns and individual sessions are excluded.
///
/// Expected: Ok with only the turn's sessions
#[tokio::test]
async fn lists_only_sessions_of_turn() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let institute = factory::create_institute(db).await?;
    let turn = factory::create_turn(db, institute.ins_seq).await?;
    let other_turn = factory::create_turn(db, institute.ins_seq).await?;

    let (_, _, first) =
        factory::helpers::create_turn_session(db, institute.ins_seq, turn.tur_seq, "Kang Minho")
            .await?;
    let (_, _, second) =
        factory::helpers::create_turn_session(db, institute.ins_seq, turn.tur_seq, "Lim Sora")
            .await?;
    factory::helpers::create_turn_session(db, institute.ins_seq, other_turn.tur_seq, "Other")
        .await?;
    factory::helpers::create_session_with_dependencies(db).await?;

    let repo = SessionRepository::new(db);
    let page = repo
        .get_turn_paginated(institute.ins_seq, turn.tur_seq, &ListParams::new(0, 10, None))
        .await?;

    assert_eq!(page.total, 2);
    let mut ids: Vec<i32> = page.items.iter().map(|s| s.anp_seq).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![first.anp_seq, second.anp_seq]);

    let filtered = repo
        .get_turn_paginated(
            institute.ins_seq,
            turn.tur_seq,
            &ListParams::new(0, 10, Some("Sora".to_string())),
        )
        .await?;
    assert_eq!(filtered.total, 1);
    assert_eq!(filtered.items[0].anp_seq, second.anp_seq);

    Ok(())
}
