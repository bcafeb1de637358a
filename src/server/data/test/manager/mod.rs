use crate::server::{
    data::manager::{LoginLogRepository, ManagerRepository},
    model::{
        manager::{CreateManagerParams, Permissions, UpdateManagerParams},
        pagination::ListParams,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod get_paginated;
mod login_log;
mod update;
