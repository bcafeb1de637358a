use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::manager::ManagerRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::manager::Manager,
};

/// Permission flags a manager may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Manage test-taker accounts.
    Accounts,
    /// Manage institutes and their turns.
    Institutes,
    /// Manage other managers.
    Managers,
    /// View individual and group test results.
    Results,
}

impl Permission {
    fn name(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Institutes => "institutes",
            Self::Managers => "managers",
            Self::Results => "results",
        }
    }
}

/// Checks that the session belongs to an enabled manager holding a set of permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in manager and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(Manager)` - Manager is logged in, enabled and holds all permissions
    /// - `Err(AuthError::ManagerNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::ManagerNotInDatabase)` - Session refers to a deleted manager
    /// - `Err(AuthError::AccessDenied)` - Manager is disabled or lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<Manager, AppError> {
        let manager_repo = ManagerRepository::new(self.db);

        let Some(mg_seq) = AuthSession::new(self.session).get_manager_id().await? else {
            return Err(AuthError::ManagerNotInSession.into());
        };

        let Some(manager) = manager_repo.find_by_id(mg_seq).await? else {
            return Err(AuthError::ManagerNotInDatabase(mg_seq).into());
        };

        if !manager.enabled {
            return Err(AuthError::AccessDenied(mg_seq, "manager is disabled".to_string()).into());
        }

        for permission in permissions {
            let granted = match permission {
                Permission::Accounts => manager.permissions.accounts,
                Permission::Institutes => manager.permissions.institutes,
                Permission::Managers => manager.permissions.managers,
                Permission::Results => manager.permissions.results,
            };

            if !granted {
                return Err(AuthError::AccessDenied(
                    mg_seq,
                    format!("missing {} permission", permission.name()),
                )
                .into());
            }
        }

        Ok(manager)
    }
}
