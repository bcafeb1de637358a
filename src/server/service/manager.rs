use sea_orm::DatabaseConnection;

use crate::server::{
    data::manager::{LoginLogRepository, ManagerRepository},
    error::AppError,
    model::{
        manager::{CreateManagerParams, LoginLog, Manager, Permissions, UpdateManagerParams},
        pagination::{ListParams, Page},
    },
    util::password::PasswordHasher,
};

/// Minimum length of a manager password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Manager fields as received from a create request, before hashing.
pub struct NewManager {
    pub email: String,
    pub name: String,
    pub password: String,
    pub permissions: Permissions,
}

/// Manager fields as received from an update request, before hashing.
pub struct ManagerChanges {
    pub name: String,
    pub enabled: bool,
    pub permissions: Permissions,
    pub password: Option<String>,
}

pub struct ManagerService<'a> {
    db: &'a DatabaseConnection,
    password_hasher: &'a dyn PasswordHasher,
}

impl<'a> ManagerService<'a> {
    pub fn new(db: &'a DatabaseConnection, password_hasher: &'a dyn PasswordHasher) -> Self {
        Self {
            db,
            password_hasher,
        }
    }

    /// Gets a page of managers matching the search
    pub async fn get_paginated(&self, params: &ListParams) -> Result<Page<Manager>, AppError> {
        Ok(ManagerRepository::new(self.db).get_paginated(params).await?)
    }

    /// Gets one manager or fails with 404
    pub async fn get_by_id(&self, mg_seq: i32) -> Result<Manager, AppError> {
        ManagerRepository::new(self.db)
            .find_by_id(mg_seq)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a manager.
    ///
    /// # Returns
    /// - `Ok(Manager)` - The created, enabled manager
    /// - `Err(AppError::BadRequest)` - Missing name, malformed email, short password or
    ///   email already in use
    pub async fn create(&self, new: NewManager) -> Result<Manager, AppError> {
        let repo = ManagerRepository::new(self.db);

        let email = new.email.trim().to_string();
        let name = new.name.trim().to_string();

        if !email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }
        if name.is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        validate_password(&new.password)?;

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "A manager with this email already exists".to_string(),
            ));
        }

        let manager = repo
            .create(CreateManagerParams {
                email,
                name,
                password_hash: self.password_hasher.hash(&new.password),
                permissions: new.permissions,
            })
            .await?;

        tracing::info!("Created manager {}", manager.mg_seq);

        Ok(manager)
    }

    /// Updates a manager on behalf of `actor`.
    ///
    /// A manager cannot disable their own account.
    pub async fn update(
        &self,
        actor: i32,
        mg_seq: i32,
        changes: ManagerChanges,
    ) -> Result<Manager, AppError> {
        let name = changes.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if actor == mg_seq && !changes.enabled {
            return Err(AppError::BadRequest(
                "You cannot disable your own account".to_string(),
            ));
        }

        let password_hash = match changes.password.as_deref() {
            Some(password) => {
                validate_password(password)?;
                Some(self.password_hasher.hash(password))
            }
            None => None,
        };

        ManagerRepository::new(self.db)
            .update(UpdateManagerParams {
                mg_seq,
                name,
                enabled: changes.enabled,
                permissions: changes.permissions,
                password_hash,
            })
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes a manager and their login history on behalf of `actor`.
    ///
    /// A manager cannot delete their own account.
    pub async fn delete(&self, actor: i32, mg_seq: i32) -> Result<(), AppError> {
        if actor == mg_seq {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !ManagerRepository::new(self.db).delete(mg_seq).await? {
            return Err(not_found());
        }

        tracing::info!("Manager {} deleted manager {}", actor, mg_seq);

        Ok(())
    }

    /// Gets a page of a manager's login history, newest first
    pub async fn get_logins(
        &self,
        mg_seq: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Page<LoginLog>, AppError> {
        // 404 for unknown managers rather than an empty history
        self.get_by_id(mg_seq).await?;

        Ok(LoginLogRepository::new(self.db)
            .get_paginated_by_manager(mg_seq, page, per_page)
            .await?)
    }
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

fn not_found() -> AppError {
    AppError::NotFound("Manager not found".to_string())
}
