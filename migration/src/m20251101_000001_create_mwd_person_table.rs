use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdPerson::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdPerson::PeSeq))
                    .col(string(MwdPerson::PeName))
                    .col(integer(MwdPerson::PeBirthYear))
                    .col(integer(MwdPerson::PeBirthMonth))
                    .col(integer(MwdPerson::PeBirthDay))
                    .col(string_len(MwdPerson::PeSex, 1))
                    .col(string(MwdPerson::PeEmail))
                    .col(string(MwdPerson::PeCellphone))
                    .col(string_null(MwdPerson::PeSchoolName))
                    .col(string_null(MwdPerson::PeSchoolMajor))
                    .col(string_null(MwdPerson::PeJobName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdPerson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdPerson {
    Table,
    PeSeq,
    PeName,
    PeBirthYear,
    PeBirthMonth,
    PeBirthDay,
    PeSex,
    PeEmail,
    PeCellphone,
    PeSchoolName,
    PeSchoolMajor,
    PeJobName,
}
