use super::*;

/// Tests reading the scores of one step ordered by rank.
///
/// Verifies that scores of other steps and other sessions are excluded and that
/// category names are attached.
///
/// Expected: Ok with the step's scores ordered by rank
#[tokio::test]
async fn returns_step_scores_by_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, progress) = factory::helpers::create_session_with_dependencies(db).await?;
    let (_, _, other) = factory::helpers::create_session_with_dependencies(db).await?;
    factory::create_question_attr(db, "K01", "Analytical", "thk").await?;
    factory::create_question_attr(db, "K02", "Creative", "thk").await?;

    factory::score::ScoreFactory::new(db, progress.anp_seq, "thk", "K02")
        .rank(2)
        .score(61.5)
        .build()
        .await?;
    factory::score::ScoreFactory::new(db, progress.anp_seq, "thk", "K01")
        .rank(1)
        .score(72.0)
        .rate(80.0)
        .build()
        .await?;
    factory::create_score(db, progress.anp_seq, "tnd", "T01", 1).await?;
    factory::create_score(db, other.anp_seq, "thk", "K01", 1).await?;

    let repo = ScoreRepository::new(db);
    let scores = repo.get_by_step(progress.anp_seq, ScoreStep::Thinking).await?;

    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].code, "K01");
    assert_eq!(scores[0].name, "Analytical");
    assert_eq!(scores[0].score, 72.0);
    assert_eq!(scores[0].rate, 80.0);
    assert_eq!(scores[1].code, "K02");
    assert_eq!(scores[1].rank, 2);

    Ok(())
}

/// Tests scores whose category is missing from the attribute table.
///
/// Expected: Ok with the category code used as name
#[tokio::test]
async fn falls_back_to_code_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, progress) = factory::helpers::create_session_with_dependencies(db).await?;
    factory::create_score(db, progress.anp_seq, "img", "I09", 1).await?;

    let repo = ScoreRepository::new(db);
    let scores = repo
        .get_by_step(progress.anp_seq, ScoreStep::ImagePreference)
        .await?;

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].name, "I09");

    Ok(())
}

/// Tests a session without scores for the step.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unscored_step() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, progress) = factory::helpers::create_session_with_dependencies(db).await?;

    let repo = ScoreRepository::new(db);
    let scores = repo
        .get_by_step(progress.anp_seq, ScoreStep::Competency)
        .await?;

    assert!(scores.is_empty());

    Ok(())
}
