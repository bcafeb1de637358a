//! Account factory for creating test account entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let account = AccountFactory::new(&db, person.pe_seq)
///     .ac_id("student01")
///     .institute(institute.ins_seq, turn.tur_seq)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    ac_gid: String,
    ac_id: String,
    enabled: bool,
    pe_seq: i32,
    ins_seq: Option<i32>,
    tur_seq: Option<i32>,
    insert_date: DateTime<Utc>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - ac_gid: `"gid-{id}"`
    /// - ac_id: `"account{id}"`
    /// - enabled, not attached to any institute, inserted now
    pub fn new(db: &'a DatabaseConnection, pe_seq: i32) -> Self {
        let id = next_id();
        Self {
            db,
            ac_gid: format!("gid-{}", id),
            ac_id: format!("account{}", id),
            enabled: true,
            pe_seq,
            ins_seq: None,
            tur_seq: None,
            insert_date: Utc::now(),
        }
    }

    pub fn ac_gid(mut self, ac_gid: impl Into<String>) -> Self {
        self.ac_gid = ac_gid.into();
        self
    }

    pub fn ac_id(mut self, ac_id: impl Into<String>) -> Self {
        self.ac_id = ac_id.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Attaches the account to an institute turn.
    pub fn institute(mut self, ins_seq: i32, tur_seq: i32) -> Self {
        self.ins_seq = Some(ins_seq);
        self.tur_seq = Some(tur_seq);
        self
    }

    pub fn insert_date(mut self, insert_date: DateTime<Utc>) -> Self {
        self.insert_date = insert_date;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mwd_account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mwd_account::Model, DbErr> {
        entity::mwd_account::ActiveModel {
            ac_gid: ActiveValue::Set(self.ac_gid),
            ac_id: ActiveValue::Set(self.ac_id),
            ac_use: ActiveValue::Set(self.enabled),
            pe_seq: ActiveValue::Set(self.pe_seq),
            ins_seq: ActiveValue::Set(self.ins_seq),
            tur_seq: ActiveValue::Set(self.tur_seq),
            ac_insert_date: ActiveValue::Set(self.insert_date),
            ac_expire_date: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person and an individual account for it.
///
/// # Returns
/// - `Ok((person, account))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_account(
    db: &DatabaseConnection,
) -> Result<(entity::mwd_person::Model, entity::mwd_account::Model), DbErr> {
    let person = crate::factory::person::create_person(db).await?;
    let account = AccountFactory::new(db, person.pe_seq).build().await?;

    Ok((person, account))
}
