use super::*;

/// Tests that only sessions of individual accounts are listed.
///
/// Expected: Ok with institute sessions excluded from items and total
#[tokio::test]
async fn excludes_institute_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, individual) = factory::helpers::create_session_with_dependencies(db).await?;
    let institute = factory::create_institute(db).await?;
    let turn = factory::create_turn(db, institute.ins_seq).await?;
    factory::helpers::create_turn_session(db, institute.ins_seq, turn.tur_seq, "Group Taker")
        .await?;

    let repo = SessionRepository::new(db);
    let page = repo
        .get_individuals_paginated(&ListParams::new(0, 10, None))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].anp_seq, individual.anp_seq);

    Ok(())
}

/// Tests ordering and paging of individual sessions.
///
/// Verifies newest-first ordering and that sessions with the same start date are
/// split across pages without overlap.
///
/// Expected: Ok with disjoint, ordered pages
#[tokio::test]
async fn orders_newest_first_without_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now();
    let (_, account) = factory::create_account(db).await?;
    let mut created = Vec::new();
    for _ in 0..3 {
        let progress = factory::answer_progress::AnswerProgressFactory::new(db, &account.ac_gid)
            .start_date(start)
            .build()
            .await?;
        created.push(progress.anp_seq);
    }
    let oldest = factory::answer_progress::AnswerProgressFactory::new(db, &account.ac_gid)
        .start_date(start - Duration::days(3))
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let first = repo
        .get_individuals_paginated(&ListParams::new(0, 2, None))
        .await?;
    let second = repo
        .get_individuals_paginated(&ListParams::new(1, 2, None))
        .await?;

    assert_eq!(first.total, 4);
    assert_eq!(second.total, 4);

    let ids: Vec<i32> = first
        .items
        .iter()
        .chain(second.items.iter())
        .map(|s| s.anp_seq)
        .collect();
    created.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(&ids[..3], &created[..]);
    assert_eq!(ids[3], oldest.anp_seq);

    Ok(())
}

/// Tests searching individual sessions by person name.
///
/// Expected: Ok with only the matching person's sessions counted
#[tokio::test]
async fn filters_by_person_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .name("Jang Dahye")
        .build()
        .await?;
    let account = factory::account::AccountFactory::new(db, person.pe_seq)
        .build()
        .await?;
    factory::create_answer_progress(db, &account.ac_gid).await?;
    factory::helpers::create_session_with_dependencies(db).await?;

    let repo = SessionRepository::new(db);
    let page = repo
        .get_individuals_paginated(&ListParams::new(0, 10, Some("dahye".to_string())))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].person.name, "Jang Dahye");
    assert!(page.items[0].tendency1.is_none());

    Ok(())
}
