//! Test result domain models and the pure aggregation rules applied to score rows.
//!
//! Score rows arrive ordered by rank then category code. Where a single row is expected
//! for a rank (first and second tendency), the first row of that rank wins and any
//! further rows with the same rank are ignored.

use chrono::{DateTime, Utc};

use crate::{
    model::result::{
        CompetencyResultDto, IndividualResultDto, PersonalInfoDto, PreferenceResultDto,
        RankedCategoryDto, ScoreDetailDto, SuitableJobDto, TendencyDto, TendencyExplanationDto,
    },
    server::model::account::Person,
};

/// Number of competencies reported by the competency endpoint.
pub const TOP_COMPETENCIES: usize = 5;
/// Number of talents named in the talent summary.
pub const TOP_TALENTS: usize = 3;

/// Score step codes stored in `mwd_score1.sc1_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStep {
    Tendency,
    Thinking,
    ImagePreference,
    Competency,
    Talent,
}

impl ScoreStep {
    pub fn code(self) -> &'static str {
        match self {
            Self::Tendency => "tnd",
            Self::Thinking => "thk",
            Self::ImagePreference => "img",
            Self::Competency => "cmp",
            Self::Talent => "tal",
        }
    }
}

/// Kind of suitable-job rows computed from the tendency.
pub const TENDENCY_JOB_KIND: &str = "tnd";

/// Score of one category in one session.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub code: String,
    pub name: String,
    pub score: f64,
    pub rank: i32,
    pub rate: f64,
}

impl CategoryScore {
    /// Combines a score row with its category name. Unknown categories fall back to the code.
    pub fn from_entity(entity: entity::mwd_score1::Model, name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| entity.qua_code.clone()),
            code: entity.qua_code,
            score: entity.sc1_score,
            rank: entity.sc1_rank,
            rate: entity.sc1_rate,
        }
    }

    pub fn into_dto(self) -> ScoreDetailDto {
        ScoreDetailDto {
            code: self.code,
            name: self.name,
            score: self.score,
            rank: self.rank,
            rate: self.rate,
        }
    }

    pub fn into_ranked_dto(self) -> RankedCategoryDto {
        RankedCategoryDto {
            code: self.code,
            name: self.name,
            rank: self.rank,
            score: self.score,
        }
    }
}

/// First- and second-ranked tendency of a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tendency {
    pub first: Option<CategoryScore>,
    pub second: Option<CategoryScore>,
}

impl Tendency {
    /// Picks the first row ranked 1 and the first row ranked 2 from ordered scores.
    pub fn from_scores(scores: &[CategoryScore]) -> Self {
        let pick = |rank| scores.iter().find(|s| s.rank == rank).cloned();

        Self {
            first: pick(1),
            second: pick(2),
        }
    }

    /// `"<first>-<second>"` when both tendencies are scored.
    pub fn label(&self) -> Option<String> {
        match (&self.first, &self.second) {
            (Some(first), Some(second)) => Some(format!("{}-{}", first.name, second.name)),
            _ => None,
        }
    }

    /// First and second tendency in rank order, skipping missing ones.
    pub fn ranked(&self) -> impl Iterator<Item = &CategoryScore> {
        self.first.iter().chain(self.second.iter())
    }

    pub fn into_dto(self) -> TendencyDto {
        let label = self.label();
        TendencyDto {
            first: self.first.map(CategoryScore::into_ranked_dto),
            second: self.second.map(CategoryScore::into_ranked_dto),
            label,
        }
    }
}

/// Explanation sentences of a ranked tendency.
#[derive(Debug, Clone, PartialEq)]
pub struct TendencyExplanation {
    pub code: String,
    pub name: String,
    pub rank: i32,
    pub explanations: Vec<String>,
}

impl TendencyExplanation {
    pub fn into_dto(self) -> TendencyExplanationDto {
        TendencyExplanationDto {
            code: self.code,
            name: self.name,
            rank: self.rank,
            explanations: self.explanations,
        }
    }
}

/// A recommended job with the majors leading to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SuitableJob {
    pub rank: i32,
    pub code: String,
    pub name: String,
    pub outline: Option<String>,
    pub majors: Vec<String>,
}

impl SuitableJob {
    pub fn into_dto(self) -> SuitableJobDto {
        SuitableJobDto {
            rank: self.rank,
            code: self.code,
            name: self.name,
            outline: self.outline,
            majors: self.majors.join(", "),
        }
    }
}

/// Personal information header of a result.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    pub anp_seq: i32,
    pub ac_id: String,
    pub person: Person,
    pub institute_name: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub done: bool,
}

impl PersonalInfo {
    pub fn into_dto(self) -> PersonalInfoDto {
        PersonalInfoDto {
            birth_date: self.person.birth_date(),
            anp_seq: self.anp_seq,
            ac_id: self.ac_id,
            name: self.person.name,
            sex: self.person.sex,
            email: self.person.email,
            cellphone: self.person.cellphone,
            school_name: self.person.school_name,
            school_major: self.person.school_major,
            job_name: self.person.job_name,
            institute_name: self.institute_name,
            start_date: self.start_date,
            end_date: self.end_date,
            done: self.done,
        }
    }
}

/// Full result of one test session.
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualResult {
    pub personal_info: PersonalInfo,
    pub tendency: Tendency,
    pub tendency_explanations: Vec<TendencyExplanation>,
    pub thinking: Vec<CategoryScore>,
    pub suitable_jobs: Vec<SuitableJob>,
}

impl IndividualResult {
    pub fn into_dto(self) -> IndividualResultDto {
        IndividualResultDto {
            personal_info: self.personal_info.into_dto(),
            tendency: self.tendency.into_dto(),
            tendency_explanations: self
                .tendency_explanations
                .into_iter()
                .map(TendencyExplanation::into_dto)
                .collect(),
            thinking_details: self
                .thinking
                .into_iter()
                .map(CategoryScore::into_dto)
                .collect(),
            suitable_jobs: self
                .suitable_jobs
                .into_iter()
                .map(SuitableJob::into_dto)
                .collect(),
        }
    }
}

/// Image preference rates of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceResult {
    /// Categories ordered by rank.
    pub categories: Vec<CategoryScore>,
}

impl PreferenceResult {
    /// The best ranked category.
    pub fn top(&self) -> Option<&CategoryScore> {
        self.categories.first()
    }

    pub fn into_dto(self) -> PreferenceResultDto {
        let top = self.top().cloned().map(CategoryScore::into_dto);
        PreferenceResultDto {
            categories: self
                .categories
                .into_iter()
                .map(CategoryScore::into_dto)
                .collect(),
            top,
        }
    }
}

/// Competency and talent ranks of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetencyResult {
    /// Best ranked competencies, at most `TOP_COMPETENCIES`.
    pub competencies: Vec<CategoryScore>,
    /// All talents ordered by rank.
    pub talents: Vec<CategoryScore>,
}

impl CompetencyResult {
    /// Builds the result from all ordered competency and talent scores.
    pub fn from_scores(mut competencies: Vec<CategoryScore>, talents: Vec<CategoryScore>) -> Self {
        competencies.truncate(TOP_COMPETENCIES);
        Self {
            competencies,
            talents,
        }
    }

    /// Names of the best `TOP_TALENTS` talents joined with `", "`.
    pub fn talent_summary(&self) -> String {
        self.talents
            .iter()
            .take(TOP_TALENTS)
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn into_dto(self) -> CompetencyResultDto {
        let talent_summary = self.talent_summary();
        CompetencyResultDto {
            competencies: self
                .competencies
                .into_iter()
                .map(CategoryScore::into_dto)
                .collect(),
            talents: self
                .talents
                .into_iter()
                .map(CategoryScore::into_dto)
                .collect(),
            talent_summary,
        }
    }
}
