use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A test taker's account together with the person it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub ac_gid: String,
    pub ac_id: String,
    pub enabled: bool,
    pub pe_seq: i32,
    pub name: String,
    /// Formatted as `YYYY-MM-DD`.
    pub birth_date: String,
    pub sex: String,
    pub email: String,
    pub cellphone: String,
    pub school_name: Option<String>,
    pub school_major: Option<String>,
    pub job_name: Option<String>,
    pub ins_seq: Option<i32>,
    pub tur_seq: Option<i32>,
    pub insert_date: DateTime<Utc>,
    pub expire_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateAccountStatusDto {
    pub enabled: bool,
}
