use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000001_create_mwd_person_table::MwdPerson;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdAccount::Table)
                    .if_not_exists()
                    .col(string(MwdAccount::AcGid).primary_key())
                    .col(string_uniq(MwdAccount::AcId))
                    .col(boolean(MwdAccount::AcUse).default(true))
                    .col(integer(MwdAccount::PeSeq))
                    .col(integer_null(MwdAccount::InsSeq))
                    .col(integer_null(MwdAccount::TurSeq))
                    .col(
                        timestamp_with_time_zone(MwdAccount::AcInsertDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(MwdAccount::AcExpireDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mwd_account_pe_seq")
                            .from(MwdAccount::Table, MwdAccount::PeSeq)
                            .to(MwdPerson::Table, MwdPerson::PeSeq)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdAccount {
    Table,
    AcGid,
    AcId,
    AcUse,
    PeSeq,
    InsSeq,
    TurSeq,
    AcInsertDate,
    AcExpireDate,
}
