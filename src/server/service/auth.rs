use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::manager::{LoginLogRepository, ManagerRepository},
    error::{auth::AuthError, AppError},
    model::manager::Manager,
    util::password::PasswordHasher,
};

/// Well-formed stored hash that matches no password. Unknown emails are verified
/// against it so they cost the same hashing work as a wrong password.
const UNKNOWN_MANAGER_HASH: &str =
    "00000000000000000000000000000000$0000000000000000000000000000000000000000000000000000000000000000";

/// Manager login and identity lookup.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    password_hasher: &'a dyn PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, password_hasher: &'a dyn PasswordHasher) -> Self {
        Self {
            db,
            password_hasher,
        }
    }

    /// Verifies manager credentials and records the login.
    ///
    /// Unknown emails and wrong passwords fail identically. A failure to record the
    /// login is logged and does not fail the login.
    ///
    /// # Arguments
    /// - `email` - Login email, surrounding whitespace ignored
    /// - `password` - Plain text password
    /// - `ip` - Client address stored in the login log
    ///
    /// # Returns
    /// - `Ok((Manager, last_login))` - Logged-in manager and the time of their previous login
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::ManagerDisabled)` - Correct credentials for a disabled manager
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip: Option<String>,
    ) -> Result<(Manager, Option<DateTime<Utc>>), AppError> {
        let manager_repo = ManagerRepository::new(self.db);
        let log_repo = LoginLogRepository::new(self.db);

        let Some(manager) = manager_repo.find_by_email(email.trim()).await? else {
            self.password_hasher.verify(password, UNKNOWN_MANAGER_HASH);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.password_hasher.verify(password, &manager.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !manager.enabled {
            return Err(AuthError::ManagerDisabled(manager.mg_seq).into());
        }

        let last_login = log_repo.last_login(manager.mg_seq).await?;

        if let Err(e) = log_repo.create(manager.mg_seq, ip).await {
            tracing::warn!(
                "Failed to record login of manager {}: {}",
                manager.mg_seq,
                e
            );
        }

        tracing::info!("Manager {} logged in", manager.mg_seq);

        Ok((manager, last_login))
    }

    /// Gets the time of a manager's most recent login.
    pub async fn last_login(&self, mg_seq: i32) -> Result<Option<DateTime<Utc>>, AppError> {
        Ok(LoginLogRepository::new(self.db).last_login(mg_seq).await?)
    }
}
