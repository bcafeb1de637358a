use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{account, auth, individual, institute, manager},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Octagnosis Admin API",
        description = "Administration of Octagnosis accounts, institutes, managers and test results"
    ),
    tags(
        (name = "auth", description = "Manager login and session"),
        (name = "account", description = "Test taker accounts"),
        (name = "result", description = "Individual test results"),
        (name = "institute", description = "Institutes, turns and group results"),
        (name = "manager", description = "Staff managers and login history")
    )
)]
struct ApiDoc;

/// Builds the API routes together with the OpenAPI document generated from them.
///
/// Handlers sharing a path are registered in the same `routes!` call so that the
/// document lists one path item per URL.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(account::get_accounts))
        .routes(routes!(account::get_account, account::delete_account))
        .routes(routes!(account::update_account_status))
        .routes(routes!(individual::get_individuals))
        .routes(routes!(individual::get_individual_result))
        .routes(routes!(individual::get_preference))
        .routes(routes!(individual::get_competency))
        .routes(routes!(
            institute::get_institutes,
            institute::create_institute
        ))
        .routes(routes!(
            institute::get_institute,
            institute::update_institute,
            institute::delete_institute
        ))
        .routes(routes!(institute::get_turns, institute::create_turn))
        .routes(routes!(institute::get_turn_results))
        .routes(routes!(manager::get_managers, manager::create_manager))
        .routes(routes!(
            manager::get_manager,
            manager::update_manager,
            manager::delete_manager
        ))
        .routes(routes!(manager::get_manager_logins))
        .split_for_parts()
}

/// Builds the complete application: API routes, Swagger UI at `/api/docs` and request
/// tracing.
///
/// The session layer is left to the caller so production can use the Postgres store
/// while tests use an in-memory one.
pub fn app(state: AppState) -> Router {
    let (api_routes, api) = router();

    api_routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
