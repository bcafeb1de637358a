use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000004_create_mwd_institute_table::MwdInstitute;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdInstituteTurn::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdInstituteTurn::TurSeq))
                    .col(integer(MwdInstituteTurn::InsSeq))
                    .col(string(MwdInstituteTurn::TurCode))
                    .col(integer(MwdInstituteTurn::TurReqSum).default(0))
                    .col(integer(MwdInstituteTurn::TurUseSum).default(0))
                    .col(boolean(MwdInstituteTurn::TurIsPaid).default(false))
                    .col(
                        timestamp_with_time_zone(MwdInstituteTurn::TurInsertDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mwd_institute_turn_ins_seq")
                            .from(MwdInstituteTurn::Table, MwdInstituteTurn::InsSeq)
                            .to(MwdInstitute::Table, MwdInstitute::InsSeq)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdInstituteTurn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdInstituteTurn {
    Table,
    TurSeq,
    InsSeq,
    TurCode,
    TurReqSum,
    TurUseSum,
    TurIsPaid,
    TurInsertDate,
}
