use super::*;

/// Tests deleting a manager with login history.
///
/// Verifies that the login-log rows are removed in the same transaction so no
/// orphan rows remain.
///
/// Expected: Ok(true) with no manager or login rows left
#[tokio::test]
async fn deletes_manager_and_login_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let other = factory::create_manager(db).await?;
    factory::manager::create_login_log(db, manager.mg_seq, Utc::now()).await?;
    factory::manager::create_login_log(db, manager.mg_seq, Utc::now()).await?;
    factory::manager::create_login_log(db, other.mg_seq, Utc::now()).await?;

    let repo = ManagerRepository::new(db);
    let deleted = repo.delete(manager.mg_seq).await?;

    assert!(deleted);
    assert!(repo.find_by_id(manager.mg_seq).await?.is_none());

    let remaining = entity::prelude::MwdManagerLoginLog::find()
        .filter(entity::mwd_manager_login_log::Column::MgSeq.eq(manager.mg_seq))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let others = entity::prelude::MwdManagerLoginLog::find()
        .filter(entity::mwd_manager_login_log::Column::MgSeq.eq(other.mg_seq))
        .count(db)
        .await?;
    assert_eq!(others, 1);

    Ok(())
}

/// Tests deleting a manager that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ManagerRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
