use super::*;

/// Tests listing institutes with their turn counts.
///
/// Expected: Ok with newest institute first and per-institute turn counts
#[tokio::test]
async fn lists_institutes_with_turn_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::institute::InstituteFactory::new(db)
        .insert_date(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::institute::InstituteFactory::new(db)
        .insert_date(now)
        .build()
        .await?;
    factory::create_turn(db, older.ins_seq).await?;
    factory::create_turn(db, older.ins_seq).await?;

    let repo = InstituteRepository::new(db);
    let page = repo.get_paginated(&ListParams::new(0, 10, None)).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].ins_seq, newer.ins_seq);
    assert_eq!(page.items[0].turn_count, 0);
    assert_eq!(page.items[1].ins_seq, older.ins_seq);
    assert_eq!(page.items[1].turn_count, 2);

    Ok(())
}

/// Tests searching institutes by name and contact name.
///
/// Expected: Ok with the total matching the filtered count
#[tokio::test]
async fn filters_by_name_and_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::institute::InstituteFactory::new(db)
        .name("Mirae Academy")
        .build()
        .await?;
    factory::institute::InstituteFactory::new(db)
        .manager_name("Mirae Han")
        .build()
        .await?;
    factory::create_institute(db).await?;

    let repo = InstituteRepository::new(db);
    let page = repo
        .get_paginated(&ListParams::new(0, 10, Some("mirae".to_string())))
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);

    Ok(())
}

/// Tests that institute pages never overlap when insert dates are equal.
///
/// Expected: Ok with disjoint pages covering every institute
#[tokio::test]
async fn pages_do_not_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let insert_date = Utc::now();
    for _ in 0..4 {
        factory::institute::InstituteFactory::new(db)
            .insert_date(insert_date)
            .build()
            .await?;
    }

    let repo = InstituteRepository::new(db);
    let first = repo.get_paginated(&ListParams::new(0, 3, None)).await?;
    let second = repo.get_paginated(&ListParams::new(1, 3, None)).await?;

    assert_eq!(first.items.len(), 3);
    assert_eq!(second.items.len(), 1);
    assert!(first
        .items
        .iter()
        .all(|i| i.ins_seq != second.items[0].ins_seq));
    // ins_seq descending as tie-breaker
    assert!(first.items[0].ins_seq > first.items[1].ins_seq);

    Ok(())
}
