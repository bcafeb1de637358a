//! Institute factory for creating test institutes and their turns.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test institutes with customizable fields.
pub struct InstituteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    manager_name: String,
    manager_email: String,
    insert_date: DateTime<Utc>,
}

impl<'a> InstituteFactory<'a> {
    /// Creates a new InstituteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Institute {id}"`
    /// - manager_name: `"Contact {id}"`
    /// - manager_email: `"contact{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Institute {}", id),
            manager_name: format!("Contact {}", id),
            manager_email: format!("contact{}@example.com", id),
            insert_date: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn manager_name(mut self, manager_name: impl Into<String>) -> Self {
        self.manager_name = manager_name.into();
        self
    }

    pub fn insert_date(mut self, insert_date: DateTime<Utc>) -> Self {
        self.insert_date = insert_date;
        self
    }

    /// Builds and inserts the institute entity into the database.
    pub async fn build(self) -> Result<entity::mwd_institute::Model, DbErr> {
        entity::mwd_institute::ActiveModel {
            ins_name: ActiveValue::Set(self.name),
            ins_business_num: ActiveValue::Set(None),
            ins_manager_name: ActiveValue::Set(self.manager_name),
            ins_manager_email: ActiveValue::Set(self.manager_email),
            ins_manager_cellphone: ActiveValue::Set(None),
            ins_postal_code: ActiveValue::Set(None),
            ins_address: ActiveValue::Set(None),
            ins_insert_date: ActiveValue::Set(self.insert_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an institute with default values.
pub async fn create_institute(
    db: &DatabaseConnection,
) -> Result<entity::mwd_institute::Model, DbErr> {
    InstituteFactory::new(db).build().await
}

/// Creates an unpaid turn with 10 requested seats for the given institute.
pub async fn create_turn(
    db: &DatabaseConnection,
    ins_seq: i32,
) -> Result<entity::mwd_institute_turn::Model, DbErr> {
    entity::mwd_institute_turn::ActiveModel {
        ins_seq: ActiveValue::Set(ins_seq),
        tur_code: ActiveValue::Set(format!("T{}", next_id())),
        tur_req_sum: ActiveValue::Set(10),
        tur_use_sum: ActiveValue::Set(0),
        tur_is_paid: ActiveValue::Set(false),
        tur_insert_date: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
