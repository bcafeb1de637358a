use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto, PaginatedDto},
        individual::SessionSummaryDto,
        result::{CompetencyResultDto, IndividualResultDto, PreferenceResultDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::session::SessionSummary,
        service::{result::ResultService, session::SessionService},
        state::AppState,
    },
};

/// Tag for grouping result endpoints in OpenAPI documentation
pub static RESULT_TAG: &str = "result";

/// Get paginated individual test sessions.
///
/// Lists sessions of accounts not attached to an institute, newest first, each with
/// its first- and second-ranked tendency. The search matches the person name.
///
/// # Access Control
/// - `Results` - Only managers with the results permission
#[utoipa::path(
    get,
    path = "/api/individuals",
    tag = RESULT_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved sessions", body = ApiResponseDto<PaginatedDto<SessionSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing results permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_individuals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Results])
        .await?;

    let service = SessionService::new(&state.db);

    let sessions = service.get_individuals(&query.into_params()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(
            sessions.into_dto(SessionSummary::into_dto),
        )),
    ))
}

/// Get the full result of a test session.
///
/// Returns personal information, first and second tendency with explanations,
/// thinking scores and tendency-based suitable jobs.
///
/// # Access Control
/// - `Results` - Only managers with the results permission
///
/// # Returns
/// - `200 OK` - Result (collections are empty for unscored steps)
/// - `404 Not Found` - No session with that id
#[utoipa::path(
    get,
    path = "/api/individuals-result/{anp_seq}",
    tag = RESULT_TAG,
    params(
        ("anp_seq" = i32, Path, description = "Test session id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved result", body = ApiResponseDto<IndividualResultDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing results permission", body = ErrorDto),
        (status = 404, description = "Test session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_individual_result(
    State(state): State<AppState>,
    session: Session,
    Path(anp_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Results])
        .await?;

    let service = ResultService::new(&state.db);

    let result = service.get_individual_result(anp_seq).await?;

    Ok((StatusCode::OK, Json(ApiResponseDto::ok(result.into_dto()))))
}

/// Get the image preference rates of a test session.
///
/// # Access Control
/// - `Results` - Only managers with the results permission
#[utoipa::path(
    get,
    path = "/api/individuals-result/{anp_seq}/preference",
    tag = RESULT_TAG,
    params(
        ("anp_seq" = i32, Path, description = "Test session id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved preference rates", body = ApiResponseDto<PreferenceResultDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing results permission", body = ErrorDto),
        (status = 404, description = "Test session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_preference(
    State(state): State<AppState>,
    session: Session,
    Path(anp_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Results])
        .await?;

    let service = ResultService::new(&state.db);

    let preference = service.get_preference(anp_seq).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(preference.into_dto())),
    ))
}

/// Get the competency and talent ranks of a test session.
///
/// Returns the top five competencies, all talents and a summary naming the top
/// three talents.
///
/// # Access Control
/// - `Results` - Only managers with the results permission
#[utoipa::path(
    get,
    path = "/api/individuals-result/{anp_seq}/competency",
    tag = RESULT_TAG,
    params(
        ("anp_seq" = i32, Path, description = "Test session id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved competency ranks", body = ApiResponseDto<CompetencyResultDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing results permission", body = ErrorDto),
        (status = 404, description = "Test session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competency(
    State(state): State<AppState>,
    session: Session,
    Path(anp_seq): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Results])
        .await?;

    let service = ResultService::new(&state.db);

    let competency = service.get_competency(anp_seq).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(competency.into_dto())),
    ))
}
