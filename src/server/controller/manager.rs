use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto, MessageDto, PaginatedDto},
        manager::{CreateManagerDto, LoginLogDto, ManagerDto, UpdateManagerDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::manager::{LoginLog, Manager, Permissions},
        service::manager::{ManagerChanges, ManagerService, NewManager},
        state::AppState,
    },
};

/// Tag for grouping manager endpoints in OpenAPI documentation
pub static MANAGER_TAG: &str = "manager";

/// Create a new manager.
///
/// # Access Control
/// - `Managers` - Only managers with the managers permission
///
/// # Returns
/// - `201 Created` - Successfully created manager
/// - `400 Bad Request` - Invalid email, missing name, password shorter than 8
///   characters, or email already in use
#[utoipa::path(
    post,
    path = "/api/managers",
    tag = MANAGER_TAG,
    request_body = CreateManagerDto,
    responses(
        (status = 201, description = "Successfully created manager", body = ApiResponseDto<ManagerDto>),
        (status = 400, description = "Invalid manager data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing managers permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_manager(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateManagerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Managers])
        .await?;

    let service = ManagerService::new(&state.db, state.password_hasher.as_ref());

    let manager = service
        .create(NewManager {
            email: payload.email,
            name: payload.name,
            password: payload.password,
            permissions: Permissions::from_dto(payload.permissions),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponseDto::ok(manager.into_dto())),
    ))
}

/// Get paginated managers.
///
/// The search matches name and email.
#[utoipa::path(
    get,
    path = "/api/managers",
    tag = MANAGER_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved managers", body = ApiResponseDto<PaginatedDto<ManagerDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing managers permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_managers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Managers])
        .await?;

    let service = ManagerService::new(&state.db, state.password_hasher.as_ref());

    let managers = service.get_paginated(&query.into_params()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(managers.into_dto(Manager::into_dto))),
    ))
}

/// Get a specific manager.
#[utoipa::path(
    get,
    path = "/api/managers/{mg_seq}",
    tag = MANAGER_TAG,
    params(
        ("mg_seq" = i32, Path, description = "Manager id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved manager", body = ApiResponseDto<ManagerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing managers permission", body = ErrorDto),
        (status = 404, description = "Manager not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_manager(
    State(state): State<AppState>,
    session: Session,
    Path(mg_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Managers])
        .await?;

    let service = ManagerService::new(&state.db, state.password_hasher.as_ref());

    let manager = service.get_by_id(mg_seq).await?;

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(manager.into_dto()))))
}

/// Update a manager.
///
/// Changes name, enabled flag and permissions, and the password when one is given.
/// A manager cannot disable their own account.
#[utoipa::path(
    put,
    path = "/api/managers/{mg_seq}",
    tag = MANAGER_TAG,
    params(
        ("mg_seq" = i32, Path, description = "Manager id")
    ),
    request_body = UpdateManagerDto,
    responses(
        (status = 200, description = "Successfully updated manager", body = ApiResponseDto<ManagerDto>),
        (status = 400, description = "Invalid manager data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing managers permission", body = ErrorDto),
        (status = 404, description = "Manager not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_manager(
    State(state): State<AppState>,
    session: Session,
    Path(mg_seq): Path<i32>,
    Json(payload): Json<UpdateManagerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Managers])
        .await?;

    let service = ManagerService::new(&state.db, state.password_hasher.as_ref());

    let manager = service
        .update(
            actor.mg_seq,
            mg_seq,
            ManagerChanges {
                name: payload.name,
                enabled: payload.enabled,
                permissions: Permissions::from_dto(payload.permissions),
                password: payload.password,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(manager.into_dto()))))
}

/// Delete a manager.
///
/// Deletes the manager and their login history in one transaction. A manager cannot
/// delete their own account.
#[utoipa::path(
    delete,
    path = "/api/managers/{mg_seq}",
    tag = MANAGER_TAG,
    params(
        ("mg_seq" = i32, Path, description = "Manager id")
    ),
    responses(
        (status = 200, description = "Successfully deleted manager", body = MessageDto),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing managers permission", body = ErrorDto),
        (status = 404, description = "Manager not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_manager(
    State(state): State<AppState>,
    session: Session,
    Path(mg_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Managers])
        .await?;

    let service = ManagerService::new(&state.db, state.password_hasher.as_ref());

    service.delete(actor.mg_seq, mg_seq).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Manager deleted"))))
}

/// Get paginated login history of a manager, newest first.
#[utoipa::path(
    get,
    path = "/api/managers/{mg_seq}/logins",
    tag = MANAGER_TAG,
    params(
        ("mg_seq" = i32, Path, description = "Manager id"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved login history", body = ApiResponseDto<PaginatedDto<LoginLogDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing managers permission", body = ErrorDto),
        (status = 404, description = "Manager not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_manager_logins(
    State(state): State<AppState>,
    session: Session,
    Path(mg_seq): Path<i32>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Managers])
        .await?;

    let service = ManagerService::new(&state.db, state.password_hasher.as_ref());

    let params = query.into_params();
    let logins = service
        .get_logins(mg_seq, params.page, params.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(logins.into_dto(LoginLog::into_dto))),
    ))
}
