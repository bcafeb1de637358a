use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdInstitute::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdInstitute::InsSeq))
                    .col(string(MwdInstitute::InsName))
                    .col(string_null(MwdInstitute::InsBusinessNum))
                    .col(string(MwdInstitute::InsManagerName))
                    .col(string(MwdInstitute::InsManagerEmail))
                    .col(string_null(MwdInstitute::InsManagerCellphone))
                    .col(string_null(MwdInstitute::InsPostalCode))
                    .col(text_null(MwdInstitute::InsAddress))
                    .col(
                        timestamp_with_time_zone(MwdInstitute::InsInsertDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdInstitute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdInstitute {
    Table,
    InsSeq,
    InsName,
    InsBusinessNum,
    InsManagerName,
    InsManagerEmail,
    InsManagerCellphone,
    InsPostalCode,
    InsAddress,
    InsInsertDate,
}
