use super::*;

/// Tests deleting an institute with turns and attached accounts.
///
/// Verifies that the turns are removed and the accounts are detached rather than
/// deleted, so their sessions stay available as individual results. The accounts
/// reference the turn through a foreign key, so the delete only succeeds when they
/// are detached before the turn is removed.
///
/// Expected: Ok(true) with no turns left and accounts detached
#[tokio::test]
async fn deletes_turns_and_detaches_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let institute = factory::create_institute(db).await?;
    let turn = factory::create_turn(db, institute.ins_seq).await?;
    let (_, account, progress) =
        factory::helpers::create_turn_session(db, institute.ins_seq, turn.tur_seq, "Oh Seojun")
            .await?;

    let repo = InstituteRepository::new(db);
    let deleted = repo.delete(institute.ins_seq).await?;

    assert!(deleted);
    assert!(!repo.exists(institute.ins_seq).await?);

    let turns = entity::prelude::MwdInstituteTurn::find()
        .filter(entity::mwd_institute_turn::Column::InsSeq.eq(institute.ins_seq))
        .count(db)
        .await?;
    assert_eq!(turns, 0);

    let stored = entity::prelude::MwdAccount::find_by_id(account.ac_gid.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(stored.ins_seq.is_none());
    assert!(stored.tur_seq.is_none());

    assert!(entity::prelude::MwdAnswerProgress::find_by_id(progress.anp_seq)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an institute that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_institute() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstituteRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
