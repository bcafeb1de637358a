use super::*;

/// Tests resolving first and second tendency names for several sessions.
///
/// Verifies that the first row of a duplicated rank wins and that sessions without
/// tendency scores are absent from the map.
///
/// Expected: Ok with names per session
#[tokio::test]
async fn resolves_first_and_second_tendency() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, scored) = factory::helpers::create_session_with_dependencies(db).await?;
    let (_, _, unscored) = factory::helpers::create_session_with_dependencies(db).await?;
    factory::create_question_attr(db, "T01", "Realistic", "tnd").await?;
    factory::create_question_attr(db, "T02", "Social", "tnd").await?;
    factory::create_question_attr(db, "T03", "Artistic", "tnd").await?;

    factory::create_score(db, scored.anp_seq, "tnd", "T03", 1).await?;
    factory::create_score(db, scored.anp_seq, "tnd", "T01", 1).await?;
    factory::create_score(db, scored.anp_seq, "tnd", "T02", 2).await?;
    factory::create_score(db, scored.anp_seq, "tnd", "T04", 3).await?;

    let repo = ScoreRepository::new(db);
    let names = repo
        .get_tendency_names(&[scored.anp_seq, unscored.anp_seq])
        .await?;

    let (first, second) = names.get(&scored.anp_seq).unwrap();
    assert_eq!(first.as_deref(), Some("Realistic"));
    assert_eq!(second.as_deref(), Some("Social"));
    assert!(!names.contains_key(&unscored.anp_seq));

    Ok(())
}

/// Tests resolving names for no sessions.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreRepository::new(db);

    assert!(repo.get_tendency_names(&[]).await?.is_empty());

    Ok(())
}
