use super::*;

/// Tests reading suitable jobs with their majors.
///
/// Verifies rank ordering, that only tendency-based rows are returned, and that
/// majors follow the job-major map order.
///
/// Expected: Ok with ranked jobs and their majors
#[tokio::test]
async fn returns_ranked_jobs_with_majors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, progress) = factory::helpers::create_session_with_dependencies(db).await?;
    factory::job::create_job(db, "J01", "Architect").await?;
    factory::job::create_job(db, "J02", "Counselor").await?;
    factory::job::create_job(db, "J03", "Pilot").await?;
    factory::job::create_major(db, "M01", "Architecture").await?;
    factory::job::create_major(db, "M02", "Civil Engineering").await?;
    factory::job::map_job_major(db, "J01", "M01").await?;
    factory::job::map_job_major(db, "J01", "M02").await?;

    factory::job::create_resjob(db, progress.anp_seq, "tnd", 2, "J02").await?;
    factory::job::create_resjob(db, progress.anp_seq, "tnd", 1, "J01").await?;
    factory::job::create_resjob(db, progress.anp_seq, "cmp", 1, "J03").await?;

    let repo = ScoreRepository::new(db);
    let jobs = repo.get_suitable_jobs(progress.anp_seq).await?;

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].code, "J01");
    assert_eq!(jobs[0].outline.as_deref(), Some("Architect outline"));
    assert_eq!(
        jobs[0].majors,
        vec!["Architecture".to_string(), "Civil Engineering".to_string()]
    );
    assert_eq!(jobs[1].code, "J02");
    assert!(jobs[1].majors.is_empty());

    Ok(())
}

/// Tests a session without suitable jobs.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_jobs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, progress) = factory::helpers::create_session_with_dependencies(db).await?;

    let repo = ScoreRepository::new(db);

    assert!(repo.get_suitable_jobs(progress.anp_seq).await?.is_empty());

    Ok(())
}
