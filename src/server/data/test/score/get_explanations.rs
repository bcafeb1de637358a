use super::*;

/// Tests reading explanation sentences in their display order.
///
/// Expected: Ok with sentences grouped per category and ordered
#[tokio::test]
async fn groups_sentences_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::score::create_explanation(db, "T01", 2, "Second sentence").await?;
    factory::score::create_explanation(db, "T01", 1, "First sentence").await?;
    factory::score::create_explanation(db, "T02", 1, "Other category").await?;
    factory::score::create_explanation(db, "T03", 1, "Not requested").await?;

    let repo = ScoreRepository::new(db);
    let explanations = repo
        .get_explanations(vec!["T01".to_string(), "T02".to_string()])
        .await?;

    assert_eq!(
        explanations.get("T01").unwrap(),
        &vec!["First sentence".to_string(), "Second sentence".to_string()]
    );
    assert_eq!(explanations.get("T02").unwrap().len(), 1);
    assert!(!explanations.contains_key("T03"));

    Ok(())
}
