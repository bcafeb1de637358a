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
        individual::SessionSummaryDto,
        institute::{CreateTurnDto, InstituteDto, SaveInstituteDto, TurnDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            institute::{CreateTurnParams, Institute, SaveInstituteParams, Turn},
            session::SessionSummary,
        },
        service::{institute::InstituteService, session::SessionService},
        state::AppState,
    },
};

/// Tag for grouping institute endpoints in OpenAPI documentation
pub static INSTITUTE_TAG: &str = "institute";

/// Create a new institute.
///
/// # Access Control
/// - `Institutes` - Only managers with the institutes permission
///
/// # Returns
/// - `201 Created` - Successfully created institute
/// - `400 Bad Request` - Name, contact name or contact email missing
#[utoipa::path(
    post,
    path = "/api/institutes",
    tag = INSTITUTE_TAG,
    request_body = SaveInstituteDto,
    responses(
        (status = 201, description = "Successfully created institute", body = ApiResponseDto<InstituteDto>),
        (status = 400, description = "Invalid institute data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing institutes permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_institute(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveInstituteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Institutes])
        .await?;

    let service = InstituteService::new(&state.db);

    let institute = service
        .create(SaveInstituteParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponseDto::ok(institute.into_dto())),
    ))
}

/// Get paginated institutes.
///
/// Lists institutes newest first with their turn counts. The search matches the
/// institute name and contact name.
///
/// # Access Control
/// - `Institutes` - Only managers with the institutes permission
#[utoipa::path(
    get,
    path = "/api/institutes",
    tag = INSTITUTE_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved institutes", body = ApiResponseDto<PaginatedDto<InstituteDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing institutes permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_institutes(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Institutes])
        .await?;

    let service = InstituteService::new(&state.db);

    let institutes = service.get_paginated(&query.into_params()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(institutes.into_dto(Institute::into_dto))),
    ))
}

/// Get a specific institute.
#[utoipa::path(
    get,
    path = "/api/institutes/{ins_seq}",
    tag = INSTITUTE_TAG,
    params(
        ("ins_seq" = i32, Path, description = "Institute id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved institute", body = ApiResponseDto<InstituteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing institutes permission", body = ErrorDto),
        (status = 404, description = "Institute not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_institute(
    State(state): State<AppState>,
    session: Session,
    Path(ins_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Institutes])
        .await?;

    let service = InstituteService::new(&state.db);

    let institute = service.get_by_id(ins_seq).await?;

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(institute.into_dto()))))
}

/// Update an institute.
#[utoipa::path(
    put,
    path = "/api/institutes/{ins_seq}",
    tag = INSTITUTE_TAG,
    params(
        ("ins_seq" = i32, Path, description = "Institute id")
    ),
    request_body = SaveInstituteDto,
    responses(
        (status = 200, description = "Successfully updated institute", body = ApiResponseDto<InstituteDto>),
        (status = 400, description = "Invalid institute data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing institutes permission", body = ErrorDto),
        (status = 404, description = "Institute not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_institute(
    State(state): State<AppState>,
    session: Session,
    Path(ins_seq): Path<i32>,
    Json(payload): Json<SaveInstituteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Institutes])
        .await?;

    let service = InstituteService::new(&state.db);

    let institute = service
        .update(ins_seq, SaveInstituteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(institute.into_dto()))))
}

/// Delete an institute.
///
/// Deletes its turns and detaches its accounts in the same transaction. Accounts and
/// their results are kept as individual accounts.
#[utoipa::path(
    delete,
    path = "/api/institutes/{ins_seq}",
    tag = INSTITUTE_TAG,
    params(
        ("ins_seq" = i32, Path, description = "Institute id")
    ),
    responses(
        (status = 200, description = "Successfully deleted institute", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing institutes permission", body = ErrorDto),
        (status = 404, description = "Institute not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_institute(
    State(state): State<AppState>,
    session: Session,
    Path(ins_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Institutes])
        .await?;

    let service = InstituteService::new(&state.db);

    service.delete(ins_seq).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Institute deleted"))))
}

/// Get the turns of an institute, newest first.
#[utoipa::path(
    get,
    path = "/api/institutes/{ins_seq}/turns",
    tag = INSTITUTE_TAG,
    params(
        ("ins_seq" = i32, Path, description = "Institute id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved turns", body = ApiResponseDto<Vec<TurnDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing institutes permission", body = ErrorDto),
        (status = 404, description = "Institute not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_turns(
    State(state): State<AppState>,
    session: Session,
    Path(ins_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Institutes])
        .await?;

    let service = InstituteService::new(&state.db);

    let turns: Vec<TurnDto> = service
        .get_turns(ins_seq)
        .await?
        .into_iter()
        .map(Turn::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(turns))))
}

/// Create a turn for an institute.
#[utoipa::path(
    post,
    path = "/api/institutes/{ins_seq}/turns",
    tag = INSTITUTE_TAG,
    params(
        ("ins_seq" = i32, Path, description = "Institute id")
    ),
    request_body = CreateTurnDto,
    responses(
        (status = 201, description = "Successfully created turn", body = ApiResponseDto<TurnDto>),
        (status = 400, description = "Invalid turn data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing institutes permission", body = ErrorDto),
        (status = 404, description = "Institute not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_turn(
    State(state): State<AppState>,
    session: Session,
    Path(ins_seq): Path<i32>,
    Json(payload): Json<CreateTurnDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Institutes])
        .await?;

    let service = InstituteService::new(&state.db);

    let turn = service
        .create_turn(CreateTurnParams::from_dto(ins_seq, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponseDto::ok(turn.into_dto()))))
}

/// Get paginated group results of an institute turn.
///
/// Same row shape as the individual listing, restricted to accounts of the turn.
///
/// # Access Control
/// - `Results` - Only managers with the results permission
#[utoipa::path(
    get,
    path = "/api/institutes/{ins_seq}/turns/{tur_seq}/results",
    tag = INSTITUTE_TAG,
    params(
        ("ins_seq" = i32, Path, description = "Institute id"),
        ("tur_seq" = i32, Path, description = "Turn id"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved group results", body = ApiResponseDto<PaginatedDto<SessionSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing results permission", body = ErrorDto),
        (status = 404, description = "Turn not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_turn_results(
    State(state): State<AppState>,
    session: Session,
    Path((ins_seq, tur_seq)): Path<(i32, i32)>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Results])
        .await?;

    let service = SessionService::new(&state.db);

    let sessions = service
        .get_turn_results(ins_seq, tur_seq, &query.into_params())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(
            sessions.into_dto(SessionSummary::into_dto),
        )),
    ))
}
