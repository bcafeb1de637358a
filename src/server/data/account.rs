//! Account data repository for database operations.
//!
//! Accounts are always read together with the person they belong to.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    account::Account,
    pagination::{ListParams, Page},
};

/// Repository providing database operations for test-taker accounts.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of accounts, newest first.
    ///
    /// The search matches the login id, person name or person email. Ordering falls
    /// back to `ac_gid` so pages never overlap when insert dates are equal.
    ///
    /// # Returns
    /// - `Ok(Page<Account>)` - Accounts of the requested page with the filtered total
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, params: &ListParams) -> Result<Page<Account>, DbErr> {
        let mut query = entity::prelude::MwdAccount::find()
            .find_also_related(entity::prelude::MwdPerson)
            .order_by_desc(entity::mwd_account::Column::AcInsertDate)
            .order_by_asc(entity::mwd_account::Column::AcGid);

        if let Some(search) = params.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(entity::mwd_account::Column::AcId.contains(search))
                    .add(entity::mwd_person::Column::PeName.contains(search))
                    .add(entity::mwd_person::Column::PeEmail.contains(search)),
            );
        }

        let paginator = query.paginate(self.db, params.per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(params.page).await?;

        let accounts = rows
            .into_iter()
            .filter_map(|(account, person)| person.map(|p| Account::from_entity(account, p)))
            .collect();

        Ok(Page::new(accounts, total, params.page, params.per_page))
    }

    /// Finds an account and its person by account id.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that id, or its person row is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_gid(&self, ac_gid: &str) -> Result<Option<Account>, DbErr> {
        let row = entity::prelude::MwdAccount::find_by_id(ac_gid.to_string())
            .find_also_related(entity::prelude::MwdPerson)
            .one(self.db)
            .await?;

        Ok(match row {
            Some((account, Some(person))) => Some(Account::from_entity(account, person)),
            _ => None,
        })
    }

    /// Enables or disables an account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account updated
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_enabled(&self, ac_gid: &str, enabled: bool) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::MwdAccount::find_by_id(ac_gid.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::mwd_account::ActiveModel = existing.into();
        active.ac_use = ActiveValue::Set(enabled);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes an account with everything recorded for it in one transaction.
    ///
    /// Removes, in order, the score and suitable-job rows of its sessions, the sessions,
    /// the account, and its person when no other account refers to that person.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, ac_gid: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(account) = entity::prelude::MwdAccount::find_by_id(ac_gid.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        let session_ids: Vec<i32> = entity::prelude::MwdAnswerProgress::find()
            .filter(entity::mwd_answer_progress::Column::AcGid.eq(ac_gid))
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| p.anp_seq)
            .collect();

        if !session_ids.is_empty() {
            entity::prelude::MwdScore1::delete_many()
                .filter(entity::mwd_score1::Column::AnpSeq.is_in(session_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::MwdResjob::delete_many()
                .filter(entity::mwd_resjob::Column::AnpSeq.is_in(session_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::MwdAnswerProgress::delete_many()
                .filter(entity::mwd_answer_progress::Column::AnpSeq.is_in(session_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::MwdAccount::delete_by_id(ac_gid.to_string())
            .exec(&txn)
            .await?;

        let other_accounts = entity::prelude::MwdAccount::find()
            .filter(entity::mwd_account::Column::PeSeq.eq(account.pe_seq))
            .count(&txn)
            .await?;

        if other_accounts == 0 {
            entity::prelude::MwdPerson::delete_by_id(account.pe_seq)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(true)
    }
}
