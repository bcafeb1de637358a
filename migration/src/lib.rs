//! Bootstrap migrations for the `mwd_*` schema.
//!
//! The production schema is owned elsewhere, so every table is created with
//! `IF NOT EXISTS` and `down` is only meant for local databases.

pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_mwd_person_table;
mod m20251101_000002_create_mwd_account_table;
mod m20251101_000003_create_mwd_answer_progress_table;
mod m20251101_000004_create_mwd_institute_table;
mod m20251101_000005_create_mwd_institute_turn_table;
mod m20251101_000006_create_mwd_question_tables;
mod m20251101_000007_create_mwd_score1_table;
mod m20251101_000008_create_mwd_job_tables;
mod m20251101_000009_create_mwd_manager_table;
mod m20251101_000010_create_mwd_manager_login_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_mwd_person_table::Migration),
            Box::new(m20251101_000002_create_mwd_account_table::Migration),
            Box::new(m20251101_000003_create_mwd_answer_progress_table::Migration),
            Box::new(m20251101_000004_create_mwd_institute_table::Migration),
            Box::new(m20251101_000005_create_mwd_institute_turn_table::Migration),
            Box::new(m20251101_000006_create_mwd_question_tables::Migration),
            Box::new(m20251101_000007_create_mwd_score1_table::Migration),
            Box::new(m20251101_000008_create_mwd_job_tables::Migration),
            Box::new(m20251101_000009_create_mwd_manager_table::Migration),
            Box::new(m20251101_000010_create_mwd_manager_login_log_table::Migration),
        ]
    }
}
