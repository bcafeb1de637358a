//! Score, explanation and suitable-job queries behind the result endpoints.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::result::{CategoryScore, ScoreStep, SuitableJob, TENDENCY_JOB_KIND};

/// Repository providing read access to computed test results.
pub struct ScoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreRepository<'a> {
    /// Creates a new ScoreRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every score of one step of a session with category names.
    ///
    /// Scores are ordered by rank, then category code.
    ///
    /// # Returns
    /// - `Ok(Vec<CategoryScore>)` - Ordered scores (empty when the step was not scored)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_step(
        &self,
        anp_seq: i32,
        step: ScoreStep,
    ) -> Result<Vec<CategoryScore>, DbErr> {
        let rows = entity::prelude::MwdScore1::find()
            .filter(entity::mwd_score1::Column::AnpSeq.eq(anp_seq))
            .filter(entity::mwd_score1::Column::Sc1Step.eq(step.code()))
            .order_by_asc(entity::mwd_score1::Column::Sc1Rank)
            .order_by_asc(entity::mwd_score1::Column::QuaCode)
            .all(self.db)
            .await?;

        let codes: Vec<String> = rows.iter().map(|r| r.qua_code.clone()).collect();
        let names = self.category_names(codes).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let name = names.get(&row.qua_code).cloned();
                CategoryScore::from_entity(row, name)
            })
            .collect())
    }

    /// Gets the names of the first- and second-ranked tendency of each session.
    ///
    /// Sessions without tendency scores are absent from the map. When several rows share
    /// a rank, the one with the smallest category code is used.
    pub async fn get_tendency_names(
        &self,
        session_ids: &[i32],
    ) -> Result<HashMap<i32, (Option<String>, Option<String>)>, DbErr> {
        if session_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::MwdScore1::find()
            .filter(entity::mwd_score1::Column::AnpSeq.is_in(session_ids.to_vec()))
            .filter(entity::mwd_score1::Column::Sc1Step.eq(ScoreStep::Tendency.code()))
            .filter(entity::mwd_score1::Column::Sc1Rank.is_in([1, 2]))
            .order_by_asc(entity::mwd_score1::Column::AnpSeq)
            .order_by_asc(entity::mwd_score1::Column::Sc1Rank)
            .order_by_asc(entity::mwd_score1::Column::QuaCode)
            .all(self.db)
            .await?;

        let codes: Vec<String> = rows.iter().map(|r| r.qua_code.clone()).collect();
        let names = self.category_names(codes).await?;

        let mut tendencies: HashMap<i32, (Option<String>, Option<String>)> = HashMap::new();
        for row in rows {
            let name = names
                .get(&row.qua_code)
                .cloned()
                .unwrap_or_else(|| row.qua_code.clone());
            let entry = tendencies.entry(row.anp_seq).or_default();
            let slot = if row.sc1_rank == 1 {
                &mut entry.0
            } else {
                &mut entry.1
            };
            if slot.is_none() {
                *slot = Some(name);
            }
        }

        Ok(tendencies)
    }

    /// Gets the ordered explanation sentences of each given category.
    pub async fn get_explanations(
        &self,
        codes: Vec<String>,
    ) -> Result<HashMap<String, Vec<String>>, DbErr> {
        if codes.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::MwdQuestionExplain::find()
            .filter(entity::mwd_question_explain::Column::QuaCode.is_in(codes))
            .order_by_asc(entity::mwd_question_explain::Column::QuaCode)
            .order_by_asc(entity::mwd_question_explain::Column::QueOrder)
            .order_by_asc(entity::mwd_question_explain::Column::QeSeq)
            .all(self.db)
            .await?;

        let mut explanations: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            explanations
                .entry(row.qua_code)
                .or_default()
                .push(row.que_explain);
        }

        Ok(explanations)
    }

    /// Gets the tendency-based suitable jobs of a session with their majors.
    ///
    /// Jobs are ordered by rank. Majors of each job keep the order of the job-major map.
    /// Rows pointing at a job missing from the catalogue are skipped.
    pub async fn get_suitable_jobs(&self, anp_seq: i32) -> Result<Vec<SuitableJob>, DbErr> {
        let rows = entity::prelude::MwdResjob::find()
            .filter(entity::mwd_resjob::Column::AnpSeq.eq(anp_seq))
            .filter(entity::mwd_resjob::Column::RejKind.eq(TENDENCY_JOB_KIND))
            .order_by_asc(entity::mwd_resjob::Column::RejRank)
            .order_by_asc(entity::mwd_resjob::Column::RejSeq)
            .all(self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let job_codes: Vec<String> = rows.iter().map(|r| r.jo_code.clone()).collect();

        let jobs: HashMap<String, entity::mwd_job::Model> = entity::prelude::MwdJob::find()
            .filter(entity::mwd_job::Column::JoCode.is_in(job_codes.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|j| (j.jo_code.clone(), j))
            .collect();

        let mappings = entity::prelude::MwdJobMajorMap::find()
            .filter(entity::mwd_job_major_map::Column::JoCode.is_in(job_codes))
            .order_by_asc(entity::mwd_job_major_map::Column::JmmSeq)
            .all(self.db)
            .await?;

        let major_codes: Vec<String> = mappings.iter().map(|m| m.ma_code.clone()).collect();
        let major_names: HashMap<String, String> = if major_codes.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::MwdMajor::find()
                .filter(entity::mwd_major::Column::MaCode.is_in(major_codes))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| (m.ma_code, m.ma_name))
                .collect()
        };

        let mut majors_by_job: HashMap<String, Vec<String>> = HashMap::new();
        for mapping in mappings {
            if let Some(name) = major_names.get(&mapping.ma_code) {
                majors_by_job
                    .entry(mapping.jo_code)
                    .or_default()
                    .push(name.clone());
            }
        }

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let job = jobs.get(&row.jo_code)?;
                Some(SuitableJob {
                    rank: row.rej_rank,
                    code: job.jo_code.clone(),
                    name: job.jo_name.clone(),
                    outline: job.jo_outline.clone(),
                    majors: majors_by_job.get(&row.jo_code).cloned().unwrap_or_default(),
                })
            })
            .collect())
    }

    /// Maps category codes to display names.
    async fn category_names(&self, codes: Vec<String>) -> Result<HashMap<String, String>, DbErr> {
        if codes.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::MwdQuestionAttr::find()
            .filter(entity::mwd_question_attr::Column::QuaCode.is_in(codes))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.qua_code, a.qua_name))
            .collect())
    }
}
