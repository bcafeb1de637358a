use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One test session in an individual or group result listing.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryDto {
    pub anp_seq: i32,
    pub ac_gid: String,
    pub ac_id: String,
    pub name: String,
    pub sex: String,
    pub birth_date: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub done: bool,
    /// Name of the first-ranked tendency, if scored.
    pub tendency1: Option<String>,
    /// Name of the second-ranked tendency, if scored.
    pub tendency2: Option<String>,
}
