//! Result aggregation for a single test session.
//!
//! Each operation first checks that the session exists, then runs its own fixed set of
//! queries. The three operations share no state, so one failing never affects another.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        institute::InstituteRepository, score::ScoreRepository, session::SessionRepository,
    },
    error::AppError,
    model::{
        account::Person,
        result::{
            CompetencyResult, IndividualResult, PersonalInfo, PreferenceResult, ScoreStep,
            Tendency, TendencyExplanation,
        },
    },
};

pub struct ResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the full result of a session.
    ///
    /// # Returns
    /// - `Ok(IndividualResult)` - Result, with empty collections for unscored steps
    /// - `Err(AppError::NotFound)` - No session with that id
    /// - `Err(AppError::DbErr)` - A query failed
    pub async fn get_individual_result(&self, anp_seq: i32) -> Result<IndividualResult, AppError> {
        let Some(row) = SessionRepository::new(self.db).find_by_id(anp_seq).await? else {
            return Err(not_found());
        };
        let score_repo = ScoreRepository::new(self.db);

        let institute_name = match row.account.ins_seq {
            Some(ins_seq) => InstituteRepository::new(self.db)
                .find_by_id(ins_seq)
                .await?
                .map(|i| i.name),
            None => None,
        };

        let tendency_scores = score_repo.get_by_step(anp_seq, ScoreStep::Tendency).await?;
        let tendency = Tendency::from_scores(&tendency_scores);

        let codes: Vec<String> = tendency.ranked().map(|t| t.code.clone()).collect();
        let mut explanations = score_repo.get_explanations(codes).await?;
        let tendency_explanations = tendency
            .ranked()
            .map(|t| TendencyExplanation {
                code: t.code.clone(),
                name: t.name.clone(),
                rank: t.rank,
                explanations: explanations.remove(&t.code).unwrap_or_default(),
            })
            .collect();

        let thinking = score_repo.get_by_step(anp_seq, ScoreStep::Thinking).await?;
        let suitable_jobs = score_repo.get_suitable_jobs(anp_seq).await?;

        Ok(IndividualResult {
            personal_info: PersonalInfo {
                anp_seq,
                ac_id: row.account.ac_id,
                person: Person::from_entity(row.person),
                institute_name,
                start_date: row.progress.anp_start_date,
                end_date: row.progress.anp_end_date,
                done: row.progress.anp_done,
            },
            tendency,
            tendency_explanations,
            thinking,
            suitable_jobs,
        })
    }

    /// Gets the image preference rates of a session.
    pub async fn get_preference(&self, anp_seq: i32) -> Result<PreferenceResult, AppError> {
        self.ensure_exists(anp_seq).await?;

        let categories = ScoreRepository::new(self.db)
            .get_by_step(anp_seq, ScoreStep::ImagePreference)
            .await?;

        Ok(PreferenceResult { categories })
    }

    /// Gets the competency and talent ranks of a session.
    pub async fn get_competency(&self, anp_seq: i32) -> Result<CompetencyResult, AppError> {
        self.ensure_exists(anp_seq).await?;
        let score_repo = ScoreRepository::new(self.db);

        let competencies = score_repo
            .get_by_step(anp_seq, ScoreStep::Competency)
            .await?;
        let talents = score_repo.get_by_step(anp_seq, ScoreStep::Talent).await?;

        Ok(CompetencyResult::from_scores(competencies, talents))
    }

    async fn ensure_exists(&self, anp_seq: i32) -> Result<(), AppError> {
        if !SessionRepository::new(self.db).exists(anp_seq).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Test result not found".to_string())
}
