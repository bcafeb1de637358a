use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto, MessageDto},
        auth::{AuthManagerDto, LoginDto},
    },
    server::{
        controller::client_ip,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log a manager in.
///
/// Verifies the email and password, records the login and stores the manager in the
/// session.
///
/// # Returns
/// - `200 OK` - Logged-in manager with permission flags
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Manager is disabled
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = ApiResponseDto<AuthManagerDto>),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Manager is disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.password_hasher.as_ref());

    let (manager, last_login) = service
        .login(&payload.email, &payload.password, client_ip(&headers))
        .await?;

    AuthSession::new(&session)
        .set_manager_id(manager.mg_seq)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(manager.into_auth_dto(last_login))),
    ))
}

/// Log the current manager out.
///
/// Deletes the session. Succeeds even when nobody is logged in.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Logged out"))))
}

/// Get the logged-in manager.
///
/// # Returns
/// - `200 OK` - Logged-in manager with permission flags
/// - `401 Unauthorized` - Nobody is logged in
/// - `403 Forbidden` - Manager has been disabled since logging in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in manager", body = ApiResponseDto<AuthManagerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Manager is disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let manager = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AuthService::new(&state.db, state.password_hasher.as_ref());
    let last_login = service.last_login(manager.mg_seq).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponseDto::ok(manager.into_auth_dto(last_login))),
    ))
}
