use super::*;

/// Tests listing accounts without a search filter.
///
/// Verifies that every account is counted and that accounts are returned newest
/// first.
///
/// Expected: Ok with all accounts, newest first
#[tokio::test]
async fn lists_accounts_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older_person = factory::create_person(db).await?;
    let older = factory::account::AccountFactory::new(db, older_person.pe_seq)
        .insert_date(now - Duration::days(2))
        .build()
        .await?;
    let newer_person = factory::create_person(db).await?;
    let newer = factory::account::AccountFactory::new(db, newer_person.pe_seq)
        .insert_date(now)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let page = repo.get_paginated(&ListParams::new(0, 10, None)).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].ac_gid, newer.ac_gid);
    assert_eq!(page.items[1].ac_gid, older.ac_gid);
    assert_eq!(page.items[0].person.pe_seq, newer_person.pe_seq);

    Ok(())
}

/// Tests that pages never overlap when insert dates are equal.
///
/// Verifies that the `ac_gid` tie-breaker keeps the ordering stable so walking all
/// pages yields every account exactly once.
///
/// Expected: Ok with disjoint pages covering every account
#[tokio::test]
async fn pages_do_not_overlap_with_equal_insert_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let insert_date = Utc::now();
    for _ in 0..5 {
        let person = factory::create_person(db).await?;
        factory::account::AccountFactory::new(db, person.pe_seq)
            .insert_date(insert_date)
            .build()
            .await?;
    }

    let repo = AccountRepository::new(db);
    let mut seen = Vec::new();
    for page in 0..3 {
        let result = repo.get_paginated(&ListParams::new(page, 2, None)).await?;

        assert_eq!(result.total, 5);
        assert_eq!(result.total_pages, 3);
        seen.extend(result.items.into_iter().map(|a| a.ac_gid));
    }

    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(seen.len(), 5);
    assert_eq!(unique.len(), 5);

    Ok(())
}

/// Tests searching accounts by login id, person name and person email.
///
/// Verifies that the total reflects the filtered count rather than the table size.
///
/// Expected: Ok with only matching accounts counted
#[tokio::test]
async fn filters_by_id_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_name = factory::person::PersonFactory::new(db)
        .name("Haneul Park")
        .build()
        .await?;
    factory::account::AccountFactory::new(db, by_name.pe_seq)
        .build()
        .await?;

    let by_email = factory::person::PersonFactory::new(db)
        .email("haneul.lee@example.com")
        .build()
        .await?;
    factory::account::AccountFactory::new(db, by_email.pe_seq)
        .build()
        .await?;

    let by_id = factory::create_person(db).await?;
    factory::account::AccountFactory::new(db, by_id.pe_seq)
        .ac_id("haneul-login")
        .build()
        .await?;

    factory::account::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let page = repo
        .get_paginated(&ListParams::new(0, 10, Some("haneul".to_string())))
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);

    let unfiltered = repo.get_paginated(&ListParams::new(0, 10, None)).await?;
    assert_eq!(unfiltered.total, 4);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no items but the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let page = repo.get_paginated(&ListParams::new(5, 10, None)).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}
