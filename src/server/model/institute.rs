//! Institute and institute turn domain models.

use chrono::{DateTime, Utc};

use crate::model::institute::{CreateTurnDto, InstituteDto, SaveInstituteDto, TurnDto};

/// An institution administering group tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Institute {
    pub ins_seq: i32,
    pub name: String,
    pub business_num: Option<String>,
    pub manager_name: String,
    pub manager_email: String,
    pub manager_cellphone: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub insert_date: DateTime<Utc>,
    /// Number of turns registered for the institute.
    pub turn_count: u64,
}

impl Institute {
    pub fn from_entity(entity: entity::mwd_institute::Model, turn_count: u64) -> Self {
        Self {
            ins_seq: entity.ins_seq,
            name: entity.ins_name,
            business_num: entity.ins_business_num,
            manager_name: entity.ins_manager_name,
            manager_email: entity.ins_manager_email,
            manager_cellphone: entity.ins_manager_cellphone,
            postal_code: entity.ins_postal_code,
            address: entity.ins_address,
            insert_date: entity.ins_insert_date,
            turn_count,
        }
    }

    pub fn into_dto(self) -> InstituteDto {
        InstituteDto {
            ins_seq: self.ins_seq,
            name: self.name,
            business_num: self.business_num,
            manager_name: self.manager_name,
            manager_email: self.manager_email,
            manager_cellphone: self.manager_cellphone,
            postal_code: self.postal_code,
            address: self.address,
            insert_date: self.insert_date,
            turn_count: self.turn_count,
        }
    }
}

/// Parameters for creating or updating an institute.
#[derive(Debug, Clone)]
pub struct SaveInstituteParams {
    pub name: String,
    pub business_num: Option<String>,
    pub manager_name: String,
    pub manager_email: String,
    pub manager_cellphone: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
}

impl SaveInstituteParams {
    /// Converts the request body, trimming text and turning blank optional fields into `None`.
    pub fn from_dto(dto: SaveInstituteDto) -> Self {
        fn optional(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: dto.name.trim().to_string(),
            business_num: optional(dto.business_num),
            manager_name: dto.manager_name.trim().to_string(),
            manager_email: dto.manager_email.trim().to_string(),
            manager_cellphone: optional(dto.manager_cellphone),
            postal_code: optional(dto.postal_code),
            address: optional(dto.address),
        }
    }

    /// Returns the first missing required field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.manager_name.is_empty() {
            Some("managerName")
        } else if self.manager_email.is_empty() {
            Some("managerEmail")
        } else {
            None
        }
    }
}

/// A round of group testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub tur_seq: i32,
    pub ins_seq: i32,
    pub code: String,
    pub requested_seats: i32,
    pub used_seats: i32,
    pub paid: bool,
    pub insert_date: DateTime<Utc>,
}

impl Turn {
    pub fn from_entity(entity: entity::mwd_institute_turn::Model) -> Self {
        Self {
            tur_seq: entity.tur_seq,
            ins_seq: entity.ins_seq,
            code: entity.tur_code,
            requested_seats: entity.tur_req_sum,
            used_seats: entity.tur_use_sum,
            paid: entity.tur_is_paid,
            insert_date: entity.tur_insert_date,
        }
    }

    pub fn into_dto(self) -> TurnDto {
        TurnDto {
            tur_seq: self.tur_seq,
            ins_seq: self.ins_seq,
            code: self.code,
            requested_seats: self.requested_seats,
            used_seats: self.used_seats,
            paid: self.paid,
            insert_date: self.insert_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTurnParams {
    pub ins_seq: i32,
    pub code: String,
    pub requested_seats: i32,
    pub paid: bool,
}

impl CreateTurnParams {
    pub fn from_dto(ins_seq: i32, dto: CreateTurnDto) -> Self {
        Self {
            ins_seq,
            code: dto.code.trim().to_string(),
            requested_seats: dto.requested_seats,
            paid: dto.paid,
        }
    }
}
