use crate::server::{
    data::institute::{InstituteRepository, TurnRepository},
    model::{
        institute::{CreateTurnParams, SaveInstituteParams},
        pagination::ListParams,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod turn;
mod update;

/// Helper building institute params with the required fields filled in
fn save_params(name: &str) -> SaveInstituteParams {
    SaveInstituteParams {
        name: name.to_string(),
        business_num: Some("123-45-67890".to_string()),
        manager_name: "Choi Jiwoo".to_string(),
        manager_email: "jiwoo@example.com".to_string(),
        manager_cellphone: None,
        postal_code: None,
        address: Some("Seoul".to_string()),
    }
}
