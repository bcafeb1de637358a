//! Manager factory for creating test managers and login logs.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test managers with customizable fields.
///
/// The factory stores `password_hash` as given; hash the password with the
/// application's hasher before passing it in when a test needs to log in.
///
/// # Example
///
/// ```rust,ignore
/// let manager = ManagerFactory::new(&db)
///     .email("admin@example.com")
///     .password_hash(hasher.hash("correct horse"))
///     .all_permissions()
///     .build()
///     .await?;
/// ```
pub struct ManagerFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    password_hash: String,
    enabled: bool,
    perm_account: bool,
    perm_institute: bool,
    perm_manager: bool,
    perm_result: bool,
}

impl<'a> ManagerFactory<'a> {
    /// Creates a new ManagerFactory with default values.
    ///
    /// Defaults:
    /// - email: `"manager{id}@example.com"`
    /// - name: `"Manager {id}"`
    /// - password_hash: `"invalid"` (never matches any password)
    /// - enabled, no permissions
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("manager{}@example.com", id),
            name: format!("Manager {}", id),
            password_hash: "invalid".to_string(),
            enabled: true,
            perm_account: false,
            perm_institute: false,
            perm_manager: false,
            perm_result: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn perm_account(mut self, value: bool) -> Self {
        self.perm_account = value;
        self
    }

    pub fn perm_institute(mut self, value: bool) -> Self {
        self.perm_institute = value;
        self
    }

    pub fn perm_manager(mut self, value: bool) -> Self {
        self.perm_manager = value;
        self
    }

    pub fn perm_result(mut self, value: bool) -> Self {
        self.perm_result = value;
        self
    }

    /// Grants every permission flag.
    pub fn all_permissions(self) -> Self {
        self.perm_account(true)
            .perm_institute(true)
            .perm_manager(true)
            .perm_result(true)
    }

    /// Builds and inserts the manager entity into the database.
    pub async fn build(self) -> Result<entity::mwd_manager::Model, DbErr> {
        entity::mwd_manager::ActiveModel {
            mg_email: ActiveValue::Set(self.email),
            mg_pw: ActiveValue::Set(self.password_hash),
            mg_name: ActiveValue::Set(self.name),
            mg_use: ActiveValue::Set(self.enabled),
            mg_perm_account: ActiveValue::Set(self.perm_account),
            mg_perm_institute: ActiveValue::Set(self.perm_institute),
            mg_perm_manager: ActiveValue::Set(self.perm_manager),
            mg_perm_result: ActiveValue::Set(self.perm_result),
            mg_insert_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a manager with default values.
pub async fn create_manager(db: &DatabaseConnection) -> Result<entity::mwd_manager::Model, DbErr> {
    ManagerFactory::new(db).build().await
}

/// Records a login for the given manager at the given time.
pub async fn create_login_log(
    db: &DatabaseConnection,
    mg_seq: i32,
    at: DateTime<Utc>,
) -> Result<entity::mwd_manager_login_log::Model, DbErr> {
    entity::mwd_manager_login_log::ActiveModel {
        mg_seq: ActiveValue::Set(mg_seq),
        mll_ip: ActiveValue::Set(Some("127.0.0.1".to_string())),
        mll_insert_date: ActiveValue::Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
}
