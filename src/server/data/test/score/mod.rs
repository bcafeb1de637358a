use crate::server::{data::score::ScoreRepository, model::result::ScoreStep};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_step;
mod get_explanations;
mod get_suitable_jobs;
mod get_tendency_names;
