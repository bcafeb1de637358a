use super::*;

fn update_params(mg_seq: i32, password_hash: Option<String>) -> UpdateManagerParams {
    UpdateManagerParams {
        mg_seq,
        name: "Renamed".to_string(),
        enabled: false,
        permissions: Permissions {
            accounts: false,
            institutes: true,
            managers: false,
            results: false,
        },
        password_hash,
    }
}

/// Tests updating a manager without changing the password.
///
/// Expected: Ok(Some) with the new fields and the old password hash
#[tokio::test]
async fn updates_fields_and_keeps_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::manager::ManagerFactory::new(db)
        .password_hash("old$hash")
        .all_permissions()
        .build()
        .await?;

    let repo = ManagerRepository::new(db);
    let updated = repo
        .update(update_params(manager.mg_seq, None))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(!updated.enabled);
    assert!(updated.permissions.institutes);
    assert!(!updated.permissions.accounts);
    assert_eq!(updated.password_hash, "old$hash");

    Ok(())
}

/// Tests updating a manager's password.
///
/// Expected: Ok(Some) with the new password hash stored
#[tokio::test]
async fn replaces_password_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::manager::ManagerFactory::new(db)
        .password_hash("old$hash")
        .build()
        .await?;

    let repo = ManagerRepository::new(db);
    repo.update(update_params(manager.mg_seq, Some("new$hash".to_string())))
        .await?;

    let stored = repo.find_by_id(manager.mg_seq).await?.unwrap();
    assert_eq!(stored.password_hash, "new$hash");

    Ok(())
}

/// Tests updating a manager that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ManagerRepository::new(db);

    assert!(repo.update(update_params(999, None)).await?.is_none());

    Ok(())
}
