use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::auth::PermissionsDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDto {
    pub mg_seq: i32,
    pub email: String,
    pub name: String,
    pub enabled: bool,
    pub permissions: PermissionsDto,
    pub insert_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateManagerDto {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub permissions: PermissionsDto,
}

/// Request body for updating a manager. The password is only changed when present.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateManagerDto {
    pub name: String,
    pub enabled: bool,
    pub permissions: PermissionsDto,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginLogDto {
    pub mll_seq: i32,
    pub ip: Option<String>,
    pub insert_date: DateTime<Utc>,
}
