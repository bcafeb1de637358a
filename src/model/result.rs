use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full result of one test session.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndividualResultDto {
    pub personal_info: PersonalInfoDto,
    pub tendency: TendencyDto,
    pub tendency_explanations: Vec<TendencyExplanationDto>,
    pub thinking_details: Vec<ScoreDetailDto>,
    pub suitable_jobs: Vec<SuitableJobDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoDto {
    pub anp_seq: i32,
    pub ac_id: String,
    pub name: String,
    pub birth_date: String,
    pub sex: String,
    pub email: String,
    pub cellphone: String,
    pub school_name: Option<String>,
    pub school_major: Option<String>,
    pub job_name: Option<String>,
    pub institute_name: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub done: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RankedCategoryDto {
    pub code: String,
    pub name: String,
    pub rank: i32,
    pub score: f64,
}

/// First- and second-ranked tendency of a session.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TendencyDto {
    pub first: Option<RankedCategoryDto>,
    pub second: Option<RankedCategoryDto>,
    /// `"<first>-<second>"`, present only when both are scored.
    pub label: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TendencyExplanationDto {
    pub code: String,
    pub name: String,
    pub rank: i32,
    pub explanations: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ScoreDetailDto {
    pub code: String,
    pub name: String,
    pub score: f64,
    pub rank: i32,
    pub rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SuitableJobDto {
    pub rank: i32,
    pub code: String,
    pub name: String,
    pub outline: Option<String>,
    /// Names of the related majors joined with `", "`.
    pub majors: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PreferenceResultDto {
    pub categories: Vec<ScoreDetailDto>,
    pub top: Option<ScoreDetailDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyResultDto {
    pub competencies: Vec<ScoreDetailDto>,
    pub talents: Vec<ScoreDetailDto>,
    pub talent_summary: String,
}
