use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000002_create_mwd_account_table::MwdAccount;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdAnswerProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdAnswerProgress::AnpSeq))
                    .col(string(MwdAnswerProgress::AcGid))
                    .col(string(MwdAnswerProgress::AnpStep))
                    .col(boolean(MwdAnswerProgress::AnpDone).default(false))
                    .col(
                        timestamp_with_time_zone(MwdAnswerProgress::AnpStartDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(MwdAnswerProgress::AnpEndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mwd_answer_progress_ac_gid")
                            .from(MwdAnswerProgress::Table, MwdAnswerProgress::AcGid)
                            .to(MwdAccount::Table, MwdAccount::AcGid)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdAnswerProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdAnswerProgress {
    Table,
    AnpSeq,
    AcGid,
    AnpStep,
    AnpDone,
    AnpStartDate,
    AnpEndDate,
}
