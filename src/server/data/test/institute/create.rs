use super::*;

/// Tests creating an institute.
///
/// Verifies that the repository stores every field and reports no turns for a new
/// institute.
///
/// Expected: Ok with the institute retrievable by id
#[tokio::test]
async fn creates_institute() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstituteRepository::new(db);
    let created = repo.create(save_params("Daehan High School")).await?;

    assert_eq!(created.name, "Daehan High School");
    assert_eq!(created.turn_count, 0);

    let found = repo.find_by_id(created.ins_seq).await?.unwrap();
    assert_eq!(found.manager_email, "jiwoo@example.com");
    assert_eq!(found.address.as_deref(), Some("Seoul"));
    assert!(repo.exists(created.ins_seq).await?);

    Ok(())
}

/// Tests finding an institute that does not exist.
///
/// Expected: Ok(None) and exists returns false
#[tokio::test]
async fn returns_none_for_unknown_institute() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstituteRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
