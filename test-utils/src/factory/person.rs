//! Person factory for creating test person entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    sex: String,
    birth: (i32, i32, i32),
    school_name: Option<String>,
    school_major: Option<String>,
    job_name: Option<String>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Person {id}"`
    /// - email: `"person{id}@example.com"`
    /// - sex: `"M"`
    /// - birth: 2000-01-01
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Person {}", id),
            email: format!("person{}@example.com", id),
            sex: "M".to_string(),
            birth: (2000, 1, 1),
            school_name: None,
            school_major: None,
            job_name: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = sex.into();
        self
    }

    pub fn birth(mut self, year: i32, month: i32, day: i32) -> Self {
        self.birth = (year, month, day);
        self
    }

    pub fn school(mut self, name: impl Into<String>, major: impl Into<String>) -> Self {
        self.school_name = Some(name.into());
        self.school_major = Some(major.into());
        self
    }

    pub fn job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    /// Builds and inserts the person entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mwd_person::Model)` - Created person entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mwd_person::Model, DbErr> {
        entity::mwd_person::ActiveModel {
            pe_name: ActiveValue::Set(self.name),
            pe_birth_year: ActiveValue::Set(self.birth.0),
            pe_birth_month: ActiveValue::Set(self.birth.1),
            pe_birth_day: ActiveValue::Set(self.birth.2),
            pe_sex: ActiveValue::Set(self.sex),
            pe_email: ActiveValue::Set(self.email),
            pe_cellphone: ActiveValue::Set("010-0000-0000".to_string()),
            pe_school_name: ActiveValue::Set(self.school_name),
            pe_school_major: ActiveValue::Set(self.school_major),
            pe_job_name: ActiveValue::Set(self.job_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
///
/// Shorthand for `PersonFactory::new(db).build().await`.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::mwd_person::Model, DbErr> {
    PersonFactory::new(db).build().await
}
