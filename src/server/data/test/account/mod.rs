use crate::server::{data::account::AccountRepository, model::pagination::ListParams};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod set_enabled;
