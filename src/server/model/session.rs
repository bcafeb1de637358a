//! Test session listing model.

use chrono::{DateTime, Utc};

use crate::{model::individual::SessionSummaryDto, server::model::account::Person};

/// One test session as shown in individual and group result listings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub anp_seq: i32,
    pub ac_gid: String,
    pub ac_id: String,
    pub person: Person,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub done: bool,
    pub tendency1: Option<String>,
    pub tendency2: Option<String>,
}

impl SessionSummary {
    /// Builds a summary without tendency names; the service attaches those.
    pub fn from_entity(
        progress: entity::mwd_answer_progress::Model,
        account: entity::mwd_account::Model,
        person: entity::mwd_person::Model,
    ) -> Self {
        Self {
            anp_seq: progress.anp_seq,
            ac_gid: account.ac_gid,
            ac_id: account.ac_id,
            person: Person::from_entity(person),
            start_date: progress.anp_start_date,
            end_date: progress.anp_end_date,
            done: progress.anp_done,
            tendency1: None,
            tendency2: None,
        }
    }

    pub fn into_dto(self) -> SessionSummaryDto {
        SessionSummaryDto {
            birth_date: self.person.birth_date(),
            anp_seq: self.anp_seq,
            ac_gid: self.ac_gid,
            ac_id: self.ac_id,
            name: self.person.name,
            sex: self.person.sex,
            start_date: self.start_date,
            end_date: self.end_date,
            done: self.done,
            tendency1: self.tendency1,
            tendency2: self.tendency2,
        }
    }
}
