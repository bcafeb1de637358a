use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::AppError,
    model::{
        account::Account,
        pagination::{ListParams, Page},
    },
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of accounts matching the search
    pub async fn get_paginated(&self, params: &ListParams) -> Result<Page<Account>, AppError> {
        Ok(AccountRepository::new(self.db).get_paginated(params).await?)
    }

    /// Gets one account or fails with 404
    pub async fn get_by_gid(&self, ac_gid: &str) -> Result<Account, AppError> {
        AccountRepository::new(self.db)
            .find_by_gid(ac_gid)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    /// Enables or disables an account and returns it
    pub async fn set_enabled(&self, ac_gid: &str, enabled: bool) -> Result<Account, AppError> {
        let repo = AccountRepository::new(self.db);

        if !repo.set_enabled(ac_gid, enabled).await? {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        self.get_by_gid(ac_gid).await
    }

    /// Deletes an account with its sessions and results
    pub async fn delete(&self, ac_gid: &str) -> Result<(), AppError> {
        if !AccountRepository::new(self.db).delete(ac_gid).await? {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        tracing::info!("Deleted account {}", ac_gid);

        Ok(())
    }
}
