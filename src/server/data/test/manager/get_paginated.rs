use super::*;

/// Tests listing managers ordered by id.
///
/// Expected: Ok with managers in creation order and the full total
#[tokio::test]
async fn lists_managers_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_manager(db).await?;
    let second = factory::create_manager(db).await?;
    let third = factory::create_manager(db).await?;

    let repo = ManagerRepository::new(db);
    let first_page = repo.get_paginated(&ListParams::new(0, 2, None)).await?;
    let second_page = repo.get_paginated(&ListParams::new(1, 2, None)).await?;

    assert_eq!(first_page.total, 3);
    assert_eq!(first_page.total_pages, 2);
    assert_eq!(first_page.items[0].mg_seq, first.mg_seq);
    assert_eq!(first_page.items[1].mg_seq, second.mg_seq);
    assert_eq!(second_page.items.len(), 1);
    assert_eq!(second_page.items[0].mg_seq, third.mg_seq);

    Ok(())
}

/// Tests searching managers by name and email.
///
/// Expected: Ok with the total counting only matches
#[tokio::test]
async fn filters_by_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::manager::ManagerFactory::new(db)
        .name("Yoon Auditor")
        .build()
        .await?;
    factory::manager::ManagerFactory::new(db)
        .email("auditor@example.com")
        .build()
        .await?;
    factory::create_manager(db).await?;

    let repo = ManagerRepository::new(db);
    let page = repo
        .get_paginated(&ListParams::new(0, 10, Some("auditor".to_string())))
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);

    Ok(())
}

/// Tests requesting a page number far past the end of the listing.
///
/// Verifies that the page number is bounded before the offset is computed.
///
/// Expected: Ok with no items and the real total
#[tokio::test]
async fn returns_empty_page_for_huge_page_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_manager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_manager(db).await?;
    factory::create_manager(db).await?;

    let repo = ManagerRepository::new(db);
    let page = repo
        .get_paginated(&ListParams::new(u64::MAX, 10, None))
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 2);
    assert_eq!(page.page, ListParams::MAX_PAGE);

    Ok(())
}
