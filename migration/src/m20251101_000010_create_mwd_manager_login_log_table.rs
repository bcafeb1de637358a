use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000009_create_mwd_manager_table::MwdManager;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdManagerLoginLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdManagerLoginLog::MllSeq))
                    .col(integer(MwdManagerLoginLog::MgSeq))
                    .col(string_null(MwdManagerLoginLog::MllIp))
                    .col(
                        timestamp_with_time_zone(MwdManagerLoginLog::MllInsertDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mwd_manager_login_log_mg_seq")
                            .from(MwdManagerLoginLog::Table, MwdManagerLoginLog::MgSeq)
                            .to(MwdManager::Table, MwdManager::MgSeq)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdManagerLoginLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdManagerLoginLog {
    Table,
    MllSeq,
    MgSeq,
    MllIp,
    MllInsertDate,
}
