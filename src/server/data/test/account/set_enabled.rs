use super::*;

/// Tests disabling and re-enabling an account.
///
/// Expected: Ok(true) and the flag persisted each time
#[tokio::test]
async fn toggles_enabled_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, account) = factory::account::create_account(db).await?;

    let repo = AccountRepository::new(db);

    assert!(repo.set_enabled(&account.ac_gid, false).await?);
    let stored = entity::prelude::MwdAccount::find_by_id(account.ac_gid.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.ac_use);

    assert!(repo.set_enabled(&account.ac_gid, true).await?);
    let stored = entity::prelude::MwdAccount::find_by_id(account.ac_gid.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(stored.ac_use);

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_gid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);

    assert!(!repo.set_enabled("missing", false).await?);

    Ok(())
}
