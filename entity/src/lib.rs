//! SeaORM entity models for the `mwd_*` tables of the Octagnosis schema.

pub mod prelude;

pub mod mwd_account;
pub mod mwd_answer_progress;
pub mod mwd_institute;
pub mod mwd_institute_turn;
pub mod mwd_job;
pub mod mwd_job_major_map;
pub mod mwd_major;
pub mod mwd_manager;
pub mod mwd_manager_login_log;
pub mod mwd_person;
pub mod mwd_question_attr;
pub mod mwd_question_explain;
pub mod mwd_resjob;
pub mod mwd_score1;
