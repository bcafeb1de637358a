use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Permission flags of a manager.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
pub struct PermissionsDto {
    pub accounts: bool,
    pub institutes: bool,
    pub managers: bool,
    pub results: bool,
}

/// The logged-in manager as returned by login and `/api/auth/user`.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthManagerDto {
    pub mg_seq: i32,
    pub email: String,
    pub name: String,
    pub permissions: PermissionsDto,
    pub last_login: Option<DateTime<Utc>>,
}
