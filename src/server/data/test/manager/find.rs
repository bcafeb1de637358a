use super::*;

/// Tests finding a manager by id and by email.
///
/// Expected: Ok(Some) for both lookups
#[tokio::test]
async fn finds_manager_by_id_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::manager::ManagerFactory::new(db)
        .email("lookup@example.com")
        .perm_result(true)
        .build()
        .await?;

    let repo = ManagerRepository::new(db);

    let by_id = repo.find_by_id(manager.mg_seq).await?.unwrap();
    assert_eq!(by_id.email, "lookup@example.com");
    assert!(by_id.permissions.results);

    let by_email = repo.find_by_email("lookup@example.com").await?.unwrap();
    assert_eq!(by_email.mg_seq, manager.mg_seq);

    Ok(())
}

/// Tests looking up managers that do not exist.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn returns_none_for_unknown_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ManagerRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
