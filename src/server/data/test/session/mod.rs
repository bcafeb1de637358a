use crate::server::{data::session::SessionRepository, model::pagination::ListParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_individuals_paginated;
mod get_turn_paginated;
