use super::*;

/// Tests creating a turn and listing turns newest first.
///
/// Expected: Ok with the created turn listed before the older one
#[tokio::test]
async fn creates_and_lists_turns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let institute = factory::create_institute(db).await?;
    let older = factory::create_turn(db, institute.ins_seq).await?;

    let repo = TurnRepository::new(db);
    let created = repo
        .create(CreateTurnParams {
            ins_seq: institute.ins_seq,
            code: "2024-SPRING".to_string(),
            requested_seats: 40,
            paid: true,
        })
        .await?;

    assert_eq!(created.code, "2024-SPRING");
    assert_eq!(created.requested_seats, 40);
    assert_eq!(created.used_seats, 0);
    assert!(created.paid);

    let turns = repo.get_by_institute(institute.ins_seq).await?;
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].tur_seq, created.tur_seq);
    assert_eq!(turns[1].tur_seq, older.tur_seq);

    Ok(())
}

/// Tests finding a turn through the wrong institute.
///
/// Verifies that a turn is only found under the institute it belongs to.
///
/// Expected: Ok(None) for the other institute
#[tokio::test]
async fn finds_turn_only_under_its_institute() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let institute = factory::create_institute(db).await?;
    let other = factory::create_institute(db).await?;
    let turn = factory::create_turn(db, institute.ins_seq).await?;

    let repo = TurnRepository::new(db);

    assert!(repo.find(institute.ins_seq, turn.tur_seq).await?.is_some());
    assert!(repo.find(other.ins_seq, turn.tur_seq).await?.is_none());

    Ok(())
}
