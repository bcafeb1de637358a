use super::*;

/// Tests recording a login and reading it back as the last login.
///
/// Expected: Ok with the recorded address and time
#[tokio::test]
async fn records_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;

    let repo = LoginLogRepository::new(db);
    assert!(repo.last_login(manager.mg_seq).await?.is_none());

    let log = repo
        .create(manager.mg_seq, Some("10.0.0.1".to_string()))
        .await?;

    assert_eq!(log.ip.as_deref(), Some("10.0.0.1"));
    assert_eq!(
        repo.last_login(manager.mg_seq).await?,
        Some(log.insert_date)
    );

    Ok(())
}

/// Tests paging through a manager's login history.
///
/// Verifies newest-first ordering and that other managers' logins are excluded.
///
/// Expected: Ok with logins of the manager only, newest first
#[tokio::test]
async fn pages_login_history_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let other = factory::create_manager(db).await?;

    let now = Utc::now();
    let oldest = factory::manager::create_login_log(db, manager.mg_seq, now - Duration::days(2))
        .await?;
    factory::manager::create_login_log(db, manager.mg_seq, now - Duration::days(1)).await?;
    let newest = factory::manager::create_login_log(db, manager.mg_seq, now).await?;
    factory::manager::create_login_log(db, other.mg_seq, now).await?;

    let repo = LoginLogRepository::new(db);
    let first = repo.get_paginated_by_manager(manager.mg_seq, 0, 2).await?;
    let second = repo.get_paginated_by_manager(manager.mg_seq, 1, 2).await?;

    assert_eq!(first.total, 3);
    assert_eq!(first.items[0].mll_seq, newest.mll_seq);
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].mll_seq, oldest.mll_seq);
    assert_eq!(repo.last_login(manager.mg_seq).await?, Some(newest.mll_insert_date));

    Ok(())
}
