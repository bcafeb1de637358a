use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstituteDto {
    pub ins_seq: i32,
    pub name: String,
    pub business_num: Option<String>,
    pub manager_name: String,
    pub manager_email: String,
    pub manager_cellphone: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub insert_date: DateTime<Utc>,
    pub turn_count: u64,
}

/// Request body for creating or updating an institute.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveInstituteDto {
    pub name: String,
    #[serde(default)]
    pub business_num: Option<String>,
    pub manager_name: String,
    pub manager_email: String,
    #[serde(default)]
    pub manager_cellphone: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TurnDto {
    pub tur_seq: i32,
    pub ins_seq: i32,
    pub code: String,
    pub requested_seats: i32,
    pub used_seats: i32,
    pub paid: bool,
    pub insert_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTurnDto {
    pub code: String,
    pub requested_seats: i32,
    #[serde(default)]
    pub paid: bool,
}
