use super::*;

/// Tests finding a session with its account and person.
///
/// Expected: Ok(Some) with all three rows
#[tokio::test]
async fn finds_session_with_account_and_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, account, progress) =
        factory::helpers::create_session_with_dependencies(db).await?;

    let repo = SessionRepository::new(db);
    let row = repo.find_by_id(progress.anp_seq).await?.unwrap();

    assert_eq!(row.progress.anp_seq, progress.anp_seq);
    assert_eq!(row.account.ac_gid, account.ac_gid);
    assert_eq!(row.person.pe_seq, person.pe_seq);
    assert!(repo.exists(progress.anp_seq).await?);

    Ok(())
}

/// Tests finding a session that does not exist.
///
/// Expected: Ok(None) and exists returns false
#[tokio::test]
async fn returns_none_for_unknown_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
