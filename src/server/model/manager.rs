//! Manager domain models and parameters.
//!
//! Managers are the staff accounts that log into the dashboard. Each carries four
//! permission flags checked by `AuthGuard`.

use chrono::{DateTime, Utc};

use crate::model::{
    auth::{AuthManagerDto, PermissionsDto},
    manager::{LoginLogDto, ManagerDto},
};

/// Permission flags of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    pub accounts: bool,
    pub institutes: bool,
    pub managers: bool,
    pub results: bool,
}

impl Permissions {
    pub fn from_dto(dto: PermissionsDto) -> Self {
        Self {
            accounts: dto.accounts,
            institutes: dto.institutes,
            managers: dto.managers,
            results: dto.results,
        }
    }

    pub fn into_dto(self) -> PermissionsDto {
        PermissionsDto {
            accounts: self.accounts,
            institutes: self.institutes,
            managers: self.managers,
            results: self.results,
        }
    }
}

/// Staff manager with credentials and permissions.
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    pub mg_seq: i32,
    pub email: String,
    pub name: String,
    /// Stored password hash. Never leaves the server.
    pub password_hash: String,
    pub enabled: bool,
    pub permissions: Permissions,
    pub insert_date: DateTime<Utc>,
}

impl Manager {
    pub fn from_entity(entity: entity::mwd_manager::Model) -> Self {
        Self {
            mg_seq: entity.mg_seq,
            email: entity.mg_email,
            name: entity.mg_name,
            password_hash: entity.mg_pw,
            enabled: entity.mg_use,
            permissions: Permissions {
                accounts: entity.mg_perm_account,
                institutes: entity.mg_perm_institute,
                managers: entity.mg_perm_manager,
                results: entity.mg_perm_result,
            },
            insert_date: entity.mg_insert_date,
        }
    }

    pub fn into_dto(self) -> ManagerDto {
        ManagerDto {
            mg_seq: self.mg_seq,
            email: self.email,
            name: self.name,
            enabled: self.enabled,
            permissions: self.permissions.into_dto(),
            insert_date: self.insert_date,
        }
    }

    /// Converts the manager into the identity returned by login and `/api/auth/user`.
    ///
    /// # Arguments
    /// - `last_login` - Time of the most recent recorded login, if any
    pub fn into_auth_dto(self, last_login: Option<DateTime<Utc>>) -> AuthManagerDto {
        AuthManagerDto {
            mg_seq: self.mg_seq,
            email: self.email,
            name: self.name,
            permissions: self.permissions.into_dto(),
            last_login,
        }
    }
}

/// Parameters for creating a manager. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateManagerParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub permissions: Permissions,
}

/// Parameters for updating a manager.
#[derive(Debug, Clone)]
pub struct UpdateManagerParams {
    pub mg_seq: i32,
    pub name: String,
    pub enabled: bool,
    pub permissions: Permissions,
    /// New password hash, `None` keeps the current password.
    pub password_hash: Option<String>,
}

/// One recorded manager login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginLog {
    pub mll_seq: i32,
    pub mg_seq: i32,
    pub ip: Option<String>,
    pub insert_date: DateTime<Utc>,
}

impl LoginLog {
    pub fn from_entity(entity: entity::mwd_manager_login_log::Model) -> Self {
        Self {
            mll_seq: entity.mll_seq,
            mg_seq: entity.mg_seq,
            ip: entity.mll_ip,
            insert_date: entity.mll_insert_date,
        }
    }

    pub fn into_dto(self) -> LoginLogDto {
        LoginLogDto {
            mll_seq: self.mll_seq,
            ip: self.ip,
            insert_date: self.insert_date,
        }
    }
}
