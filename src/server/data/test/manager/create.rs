use super::*;

/// Tests creating a manager.
///
/// Verifies that the manager is stored enabled with the requested permission flags.
///
/// Expected: Ok with the manager retrievable by email
#[tokio::test]
async fn creates_enabled_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ManagerRepository::new(db);
    let created = repo
        .create(CreateManagerParams {
            email: "staff@example.com".to_string(),
            name: "Staff".to_string(),
            password_hash: "salt$digest".to_string(),
            permissions: Permissions {
                accounts: true,
                institutes: false,
                managers: false,
                results: true,
            },
        })
        .await?;

    assert!(created.enabled);
    assert!(created.permissions.accounts);
    assert!(!created.permissions.managers);

    let found = repo.find_by_email("staff@example.com").await?.unwrap();
    assert_eq!(found.mg_seq, created.mg_seq);
    assert_eq!(found.password_hash, "salt$digest");

    Ok(())
}
