//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Password hasher used to verify and create manager credentials

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::util::password::PasswordHasher;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn PasswordHasher>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the `mwd_*` tables.
    pub db: DatabaseConnection,

    /// Hasher used for manager login and password changes.
    pub password_hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `password_hasher` - Credential hasher
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            db,
            password_hasher,
        }
    }
}
