//! Account and person domain models.

use chrono::{DateTime, Utc};

use crate::model::account::AccountDto;

/// Personal details of a test taker.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub pe_seq: i32,
    pub name: String,
    pub birth_year: i32,
    pub birth_month: i32,
    pub birth_day: i32,
    pub sex: String,
    pub email: String,
    pub cellphone: String,
    pub school_name: Option<String>,
    pub school_major: Option<String>,
    pub job_name: Option<String>,
}

impl Person {
    pub fn from_entity(entity: entity::mwd_person::Model) -> Self {
        Self {
            pe_seq: entity.pe_seq,
            name: entity.pe_name,
            birth_year: entity.pe_birth_year,
            birth_month: entity.pe_birth_month,
            birth_day: entity.pe_birth_day,
            sex: entity.pe_sex,
            email: entity.pe_email,
            cellphone: entity.pe_cellphone,
            school_name: entity.pe_school_name,
            school_major: entity.pe_school_major,
            job_name: entity.pe_job_name,
        }
    }

    /// Birth date formatted as `YYYY-MM-DD`.
    pub fn birth_date(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.birth_year, self.birth_month, self.birth_day
        )
    }
}

/// A test taker's login account with the person it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub ac_gid: String,
    pub ac_id: String,
    pub enabled: bool,
    pub person: Person,
    pub ins_seq: Option<i32>,
    pub tur_seq: Option<i32>,
    pub insert_date: DateTime<Utc>,
    pub expire_date: Option<DateTime<Utc>>,
}

impl Account {
    pub fn from_entity(
        account: entity::mwd_account::Model,
        person: entity::mwd_person::Model,
    ) -> Self {
        Self {
            ac_gid: account.ac_gid,
            ac_id: account.ac_id,
            enabled: account.ac_use,
            person: Person::from_entity(person),
            ins_seq: account.ins_seq,
            tur_seq: account.tur_seq,
            insert_date: account.ac_insert_date,
            expire_date: account.ac_expire_date,
        }
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            birth_date: self.person.birth_date(),
            ac_gid: self.ac_gid,
            ac_id: self.ac_id,
            enabled: self.enabled,
            pe_seq: self.person.pe_seq,
            name: self.person.name,
            sex: self.person.sex,
            email: self.person.email,
            cellphone: self.person.cellphone,
            school_name: self.person.school_name,
            school_major: self.person.school_major,
            job_name: self.person.job_name,
            ins_seq: self.ins_seq,
            tur_seq: self.tur_seq,
            insert_date: self.insert_date,
            expire_date: self.expire_date,
        }
    }
}
