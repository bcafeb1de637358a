//! Answer progress factory for creating test sessions.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions (`mwd_answer_progress` rows).
pub struct AnswerProgressFactory<'a> {
    db: &'a DatabaseConnection,
    ac_gid: String,
    step: String,
    done: bool,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
}

impl<'a> AnswerProgressFactory<'a> {
    /// Creates a new AnswerProgressFactory with default values.
    ///
    /// Defaults to a finished session that started and ended now.
    pub fn new(db: &'a DatabaseConnection, ac_gid: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            db,
            ac_gid: ac_gid.into(),
            step: "END".to_string(),
            done: true,
            start_date: now,
            end_date: Some(now),
        }
    }

    /// Marks the session as still in progress at the given step.
    pub fn in_progress(mut self, step: impl Into<String>) -> Self {
        self.step = step.into();
        self.done = false;
        self.end_date = None;
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Builds and inserts the session into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mwd_answer_progress::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mwd_answer_progress::Model, DbErr> {
        entity::mwd_answer_progress::ActiveModel {
            ac_gid: ActiveValue::Set(self.ac_gid),
            anp_step: ActiveValue::Set(self.step),
            anp_done: ActiveValue::Set(self.done),
            anp_start_date: ActiveValue::Set(self.start_date),
            anp_end_date: ActiveValue::Set(self.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a finished session for the given account.
pub async fn create_answer_progress(
    db: &DatabaseConnection,
    ac_gid: &str,
) -> Result<entity::mwd_answer_progress::Model, DbErr> {
    AnswerProgressFactory::new(db, ac_gid).build().await
}
