//! Manager data repository for database operations.
//!
//! Provides `ManagerRepository` for manager records and `LoginLogRepository` for the
//! per-login audit rows.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    manager::{CreateManagerParams, LoginLog, Manager, UpdateManagerParams},
    pagination::{ListParams, Page},
};

/// Repository providing database operations for manager management.
pub struct ManagerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManagerRepository<'a> {
    /// Creates a new ManagerRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a manager by id.
    ///
    /// # Returns
    /// - `Ok(Some(Manager))` - Manager found
    /// - `Ok(None)` - No manager with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, mg_seq: i32) -> Result<Option<Manager>, DbErr> {
        let entity = entity::prelude::MwdManager::find_by_id(mg_seq)
            .one(self.db)
            .await?;

        Ok(entity.map(Manager::from_entity))
    }

    /// Finds a manager by login email.
    ///
    /// # Returns
    /// - `Ok(Some(Manager))` - Manager found
    /// - `Ok(None)` - No manager with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, DbErr> {
        let entity = entity::prelude::MwdManager::find()
            .filter(entity::mwd_manager::Column::MgEmail.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Manager::from_entity))
    }

    /// Gets a page of managers ordered by id, optionally filtered by name or email.
    ///
    /// # Returns
    /// - `Ok(Page<Manager>)` - Managers of the requested page with the filtered total
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, params: &ListParams) -> Result<Page<Manager>, DbErr> {
        let mut query =
            entity::prelude::MwdManager::find().order_by_asc(entity::mwd_manager::Column::MgSeq);

        if let Some(search) = params.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(entity::mwd_manager::Column::MgName.contains(search))
                    .add(entity::mwd_manager::Column::MgEmail.contains(search)),
            );
        }

        let paginator = query.paginate(self.db, params.per_page);
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.page).await?;
        let managers = entities.into_iter().map(Manager::from_entity).collect();

        Ok(Page::new(managers, total, params.page, params.per_page))
    }

    /// Inserts a new manager.
    ///
    /// # Returns
    /// - `Ok(Manager)` - The created manager
    /// - `Err(DbErr)` - Database error, including a unique violation on the email
    pub async fn create(&self, params: CreateManagerParams) -> Result<Manager, DbErr> {
        let entity = entity::mwd_manager::ActiveModel {
            mg_email: ActiveValue::Set(params.email),
            mg_pw: ActiveValue::Set(params.password_hash),
            mg_name: ActiveValue::Set(params.name),
            mg_use: ActiveValue::Set(true),
            mg_perm_account: ActiveValue::Set(params.permissions.accounts),
            mg_perm_institute: ActiveValue::Set(params.permissions.institutes),
            mg_perm_manager: ActiveValue::Set(params.permissions.managers),
            mg_perm_result: ActiveValue::Set(params.permissions.results),
            mg_insert_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Manager::from_entity(entity))
    }

    /// Updates a manager's name, enabled flag, permissions and optionally password.
    ///
    /// # Returns
    /// - `Ok(Some(Manager))` - The updated manager
    /// - `Ok(None)` - No manager with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateManagerParams) -> Result<Option<Manager>, DbErr> {
        let Some(existing) = entity::prelude::MwdManager::find_by_id(params.mg_seq)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::mwd_manager::ActiveModel = existing.into();
        active.mg_name = ActiveValue::Set(params.name);
        active.mg_use = ActiveValue::Set(params.enabled);
        active.mg_perm_account = ActiveValue::Set(params.permissions.accounts);
        active.mg_perm_institute = ActiveValue::Set(params.permissions.institutes);
        active.mg_perm_manager = ActiveValue::Set(params.permissions.managers);
        active.mg_perm_result = ActiveValue::Set(params.permissions.results);
        if let Some(password_hash) = params.password_hash {
            active.mg_pw = ActiveValue::Set(password_hash);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Manager::from_entity(entity)))
    }

    /// Deletes a manager and its login history in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Manager deleted
    /// - `Ok(false)` - No manager with that id
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, mg_seq: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::MwdManager::find_by_id(mg_seq)
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        entity::prelude::MwdManagerLoginLog::delete_many()
            .filter(entity::mwd_manager_login_log::Column::MgSeq.eq(mg_seq))
            .exec(&txn)
            .await?;

        entity::prelude::MwdManager::delete_by_id(mg_seq)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}

/// Repository for manager login history.
pub struct LoginLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoginLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a successful login.
    ///
    /// # Arguments
    /// - `mg_seq` - Manager that logged in
    /// - `ip` - Client address, if known
    pub async fn create(&self, mg_seq: i32, ip: Option<String>) -> Result<LoginLog, DbErr> {
        let entity = entity::mwd_manager_login_log::ActiveModel {
            mg_seq: ActiveValue::Set(mg_seq),
            mll_ip: ActiveValue::Set(ip),
            mll_insert_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LoginLog::from_entity(entity))
    }

    /// Gets a page of a manager's logins, newest first.
    pub async fn get_paginated_by_manager(
        &self,
        mg_seq: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Page<LoginLog>, DbErr> {
        let paginator = entity::prelude::MwdManagerLoginLog::find()
            .filter(entity::mwd_manager_login_log::Column::MgSeq.eq(mg_seq))
            .order_by_desc(entity::mwd_manager_login_log::Column::MllInsertDate)
            .order_by_desc(entity::mwd_manager_login_log::Column::MllSeq)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let logs = entities.into_iter().map(LoginLog::from_entity).collect();

        Ok(Page::new(logs, total, page, per_page))
    }

    /// Gets the time of the manager's most recent login.
    pub async fn last_login(&self, mg_seq: i32) -> Result<Option<DateTime<Utc>>, DbErr> {
        let last = entity::prelude::MwdManagerLoginLog::find()
            .filter(entity::mwd_manager_login_log::Column::MgSeq.eq(mg_seq))
            .order_by_desc(entity::mwd_manager_login_log::Column::MllInsertDate)
            .order_by_desc(entity::mwd_manager_login_log::Column::MllSeq)
            .limit(1)
            .one(self.db)
            .await?;

        Ok(last.map(|log| log.mll_insert_date))
    }
}
