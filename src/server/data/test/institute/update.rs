use super::*;

/// Tests updating an institute.
///
/// Expected: Ok(true) with the new values stored
#[tokio::test]
async fn updates_institute() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let institute = factory::create_institute(db).await?;

    let repo = InstituteRepository::new(db);
    let mut params = save_params("Renamed Institute");
    params.address = None;
    let updated = repo.update(institute.ins_seq, params).await?;

    assert!(updated);
    let found = repo.find_by_id(institute.ins_seq).await?.unwrap();
    assert_eq!(found.name, "Renamed Institute");
    assert!(found.address.is_none());
    assert_eq!(found.insert_date, institute.ins_insert_date);

    Ok(())
}

/// Tests updating an institute that does not exist.
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

    assert!(!repo.update(999, save_params("Nowhere")).await?);

    Ok(())
}
