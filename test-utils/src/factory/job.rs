//! Factories for the job catalogue and suitable-job rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a job with an outline derived from its name.
pub async fn create_job(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
) -> Result<entity::mwd_job::Model, DbErr> {
    entity::mwd_job::ActiveModel {
        jo_code: ActiveValue::Set(code.to_string()),
        jo_name: ActiveValue::Set(name.to_string()),
        jo_outline: ActiveValue::Set(Some(format!("{} outline", name))),
    }
    .insert(db)
    .await
}

/// Creates a major.
pub async fn create_major(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
) -> Result<entity::mwd_major::Model, DbErr> {
    entity::mwd_major::ActiveModel {
        ma_code: ActiveValue::Set(code.to_string()),
        ma_name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}

/// Maps a major to a job.
pub async fn map_job_major(
    db: &DatabaseConnection,
    jo_code: &str,
    ma_code: &str,
) -> Result<entity::mwd_job_major_map::Model, DbErr> {
    entity::mwd_job_major_map::ActiveModel {
        jo_code: ActiveValue::Set(jo_code.to_string()),
        ma_code: ActiveValue::Set(ma_code.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Records a suitable job for a session.
///
/// # Arguments
/// - `db` - Database connection
/// - `anp_seq` - Session the job was computed for
/// - `kind` - Kind of recommendation (`tnd` for tendency based)
/// - `rank` - Rank of the job within the session
/// - `jo_code` - Recommended job
pub async fn create_resjob(
    db: &DatabaseConnection,
    anp_seq: i32,
    kind: &str,
    rank: i32,
    jo_code: &str,
) -> Result<entity::mwd_resjob::Model, DbErr> {
    entity::mwd_resjob::ActiveModel {
        anp_seq: ActiveValue::Set(anp_seq),
        rej_kind: ActiveValue::Set(kind.to_string()),
        rej_rank: ActiveValue::Set(rank),
        jo_code: ActiveValue::Set(jo_code.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
