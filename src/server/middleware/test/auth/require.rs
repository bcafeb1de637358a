use super::*;

/// Tests access without a logged-in manager.
///
/// Expected: Err(AuthError::ManagerNotInSession)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::ManagerNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a manager that was deleted.
///
/// Expected: Err(AuthError::ManagerNotInDatabase)
#[tokio::test]
async fn rejects_deleted_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_manager_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::ManagerNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests a disabled manager.
///
/// Verifies that a disabled manager is denied even when no permission is required.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_disabled_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = factory::manager::ManagerFactory::new(db)
        .all_permissions()
        .enabled(false)
        .build()
        .await?;
    AuthSession::new(session)
        .set_manager_id(manager.mg_seq)
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a manager lacking the required permission flag.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_missing_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = factory::manager::ManagerFactory::new(db)
        .perm_account(true)
        .build()
        .await?;
    AuthSession::new(session)
        .set_manager_id(manager.mg_seq)
        .await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::Accounts]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::Results]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that every listed permission is checked.
///
/// Verifies that holding some but not all required flags is not enough.
///
/// Expected: Err for a partial match, Ok(Manager) when all flags are held
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let partial = factory::manager::ManagerFactory::new(db)
        .perm_institute(true)
        .build()
        .await?;
    let full = factory::manager::ManagerFactory::new(db)
        .perm_institute(true)
        .perm_result(true)
        .build()
        .await?;

    let required = [Permission::Institutes, Permission::Results];

    AuthSession::new(session)
        .set_manager_id(partial.mg_seq)
        .await?;
    assert!(AuthGuard::new(db, session).require(&required).await.is_err());

    AuthSession::new(session).set_manager_id(full.mg_seq).await?;
    let manager = AuthGuard::new(db, session).require(&required).await?;
    assert_eq!(manager.mg_seq, full.mg_seq);

    Ok(())
}
