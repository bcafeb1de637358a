use axum::http::{header, HeaderValue, Method};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Postgres database and optionally bootstraps missing tables.
///
/// The `mwd_*` schema is owned by the test-taking service, so migrations only run when
/// `RUN_MIGRATIONS` is enabled and never alter existing tables.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.run_migrations {
        tracing::info!("Running database migrations");
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

/// Creates the session layer backed by the `tower_sessions` table in Postgres.
///
/// Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let pool = db.get_postgres_connection_pool().clone();
    let session_store = PostgresStore::new(pool);

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the CORS layer for the configured dashboard origin.
///
/// Returns `None` when no origin is configured, in which case the API is only reachable
/// from the same origin.
pub fn setup_cors(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(None);
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.to_string(),
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(Some(cors))
}
