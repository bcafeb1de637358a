use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdManager::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdManager::MgSeq))
                    .col(string_uniq(MwdManager::MgEmail))
                    .col(string(MwdManager::MgPw))
                    .col(string(MwdManager::MgName))
                    .col(boolean(MwdManager::MgUse).default(true))
                    .col(boolean(MwdManager::MgPermAccount).default(false))
                    .col(boolean(MwdManager::MgPermInstitute).default(false))
                    .col(boolean(MwdManager::MgPermManager).default(false))
                    .col(boolean(MwdManager::MgPermResult).default(false))
                    .col(
                        timestamp_with_time_zone(MwdManager::MgInsertDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdManager::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdManager {
    Table,
    MgSeq,
    MgEmail,
    MgPw,
    MgName,
    MgUse,
    MgPermAccount,
    MgPermInstitute,
    MgPermManager,
    MgPermResult,
    MgInsertDate,
}
