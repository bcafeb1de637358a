use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AccountDto, UpdateAccountStatusDto},
        api::{ApiResponseDto, ErrorDto, MessageDto, PaginatedDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::account::Account,
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Get paginated accounts.
///
/// Lists test-taker accounts newest first. The search matches login id, person name
/// and person email.
///
/// # Access Control
/// - `Accounts` - Only managers with the accounts permission
///
/// # Returns
/// - `200 OK` - Page of accounts
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing permission
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved accounts", body = ApiResponseDto<PaginatedDto<AccountDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing accounts permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Accounts])
        .await?;

    let service = AccountService::new(&state.db);

    let accounts = service.get_paginated(&query.into_params()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(accounts.into_dto(Account::into_dto))),
    ))
}

/// Get a specific account.
///
/// # Access Control
/// - `Accounts` - Only managers with the accounts permission
#[utoipa::path(
    get,
    path = "/api/accounts/{ac_gid}",
    tag = ACCOUNT_TAG,
    params(
        ("ac_gid" = String, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved account", body = ApiResponseDto<AccountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing accounts permission", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    session: Session,
    Path(ac_gid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Accounts])
        .await?;

    let service = AccountService::new(&state.db);

    let account = service.get_by_gid(&ac_gid).await?;

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(account.into_dto()))))
}

/// Enable or disable an account.
///
/// # Access Control
/// - `Accounts` - Only managers with the accounts permission
#[utoipa::path(
    put,
    path = "/api/accounts/{ac_gid}/status",
    tag = ACCOUNT_TAG,
    params(
        ("ac_gid" = String, Path, description = "Account id")
    ),
    request_body = UpdateAccountStatusDto,
    responses(
        (status = 200, description = "Successfully updated account", body = ApiResponseDto<AccountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing accounts permission", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_account_status(
    State(state): State<AppState>,
    session: Session,
    Path(ac_gid): Path<String>,
    Json(payload): Json<UpdateAccountStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Accounts])
        .await?;

    let service = AccountService::new(&state.db);

    let account = service.set_enabled(&ac_gid, payload.enabled).await?;

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(account.into_dto()))))
}

/// Delete an account.
///
/// Deletes the account with its test sessions, scores and suitable jobs in one
/// transaction. The person is deleted too unless another account refers to it.
///
/// # Access Control
/// - `Accounts` - Only managers with the accounts permission
#[utoipa::path(
    delete,
    path = "/api/accounts/{ac_gid}",
    tag = ACCOUNT_TAG,
    params(
        ("ac_gid" = String, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Successfully deleted account", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing accounts permission", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
    Path(ac_gid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Accounts])
        .await?;

    let service = AccountService::new(&state.db);

    service.delete(&ac_gid).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Account deleted"))))
}
