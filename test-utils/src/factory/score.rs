//! Factories for score categories, explanations and per-session scores.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a score category (`mwd_question_attr` row).
///
/// # Arguments
/// - `db` - Database connection
/// - `code` - Category code
/// - `name` - Display name
/// - `kind` - Step code the category belongs to (`tnd`, `thk`, `img`, `cmp`, `tal`)
pub async fn create_question_attr(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    kind: &str,
) -> Result<entity::mwd_question_attr::Model, DbErr> {
    entity::mwd_question_attr::ActiveModel {
        qua_code: ActiveValue::Set(code.to_string()),
        qua_name: ActiveValue::Set(name.to_string()),
        qua_type: ActiveValue::Set(kind.to_string()),
    }
    .insert(db)
    .await
}

/// Creates one explanation sentence for a category.
pub async fn create_explanation(
    db: &DatabaseConnection,
    code: &str,
    order: i32,
    text: &str,
) -> Result<entity::mwd_question_explain::Model, DbErr> {
    entity::mwd_question_explain::ActiveModel {
        qua_code: ActiveValue::Set(code.to_string()),
        que_order: ActiveValue::Set(order),
        que_explain: ActiveValue::Set(text.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating `mwd_score1` rows.
///
/// # Example
///
/// ```rust,ignore
/// ScoreFactory::new(&db, progress.anp_seq, "thk", "thk01")
///     .rank(1)
///     .score(87.5)
///     .rate(92.0)
///     .build()
///     .await?;
/// ```
pub struct ScoreFactory<'a> {
    db: &'a DatabaseConnection,
    anp_seq: i32,
    step: String,
    code: String,
    score: f64,
    rank: i32,
    rate: f64,
}

impl<'a> ScoreFactory<'a> {
    /// Creates a new ScoreFactory ranked first with a score and rate of 50.
    pub fn new(db: &'a DatabaseConnection, anp_seq: i32, step: &str, code: &str) -> Self {
        Self {
            db,
            anp_seq,
            step: step.to_string(),
            code: code.to_string(),
            score: 50.0,
            rank: 1,
            rate: 50.0,
        }
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Builds and inserts the score row into the database.
    pub async fn build(self) -> Result<entity::mwd_score1::Model, DbErr> {
        entity::mwd_score1::ActiveModel {
            anp_seq: ActiveValue::Set(self.anp_seq),
            sc1_step: ActiveValue::Set(self.step),
            qua_code: ActiveValue::Set(self.code),
            sc1_score: ActiveValue::Set(self.score),
            sc1_rank: ActiveValue::Set(self.rank),
            sc1_rate: ActiveValue::Set(self.rate),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a score row with the given rank and default score and rate.
pub async fn create_score(
    db: &DatabaseConnection,
    anp_seq: i32,
    step: &str,
    code: &str,
    rank: i32,
) -> Result<entity::mwd_score1::Model, DbErr> {
    ScoreFactory::new(db, anp_seq, step, code)
        .rank(rank)
        .build()
        .await
}
