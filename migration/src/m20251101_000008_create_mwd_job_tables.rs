use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdJob::Table)
                    .if_not_exists()
                    .col(string(MwdJob::JoCode).primary_key())
                    .col(string(MwdJob::JoName))
                    .col(text_null(MwdJob::JoOutline))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MwdMajor::Table)
                    .if_not_exists()
                    .col(string(MwdMajor::MaCode).primary_key())
                    .col(string(MwdMajor::MaName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MwdJobMajorMap::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdJobMajorMap::JmmSeq))
                    .col(string(MwdJobMajorMap::JoCode))
                    .col(string(MwdJobMajorMap::MaCode))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MwdResjob::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdResjob::RejSeq))
                    .col(integer(MwdResjob::AnpSeq))
                    .col(string_len(MwdResjob::RejKind, 3))
                    .col(integer(MwdResjob::RejRank))
                    .col(string(MwdResjob::JoCode))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdResjob::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MwdJobMajorMap::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MwdMajor::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MwdJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdJob {
    Table,
    JoCode,
    JoName,
    JoOutline,
}

#[derive(DeriveIden)]
pub enum MwdMajor {
    Table,
    MaCode,
    MaName,
}

#[derive(DeriveIden)]
pub enum MwdJobMajorMap {
    Table,
    JmmSeq,
    JoCode,
    MaCode,
}

#[derive(DeriveIden)]
pub enum MwdResjob {
    Table,
    RejSeq,
    AnpSeq,
    RejKind,
    RejRank,
    JoCode,
}
