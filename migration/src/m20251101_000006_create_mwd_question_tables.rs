use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdQuestionAttr::Table)
                    .if_not_exists()
                    .col(string(MwdQuestionAttr::QuaCode).primary_key())
                    .col(string(MwdQuestionAttr::QuaName))
                    .col(string(MwdQuestionAttr::QuaType))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MwdQuestionExplain::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdQuestionExplain::QeSeq))
                    .col(string(MwdQuestionExplain::QuaCode))
                    .col(integer(MwdQuestionExplain::QueOrder))
                    .col(text(MwdQuestionExplain::QueExplain))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdQuestionExplain::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MwdQuestionAttr::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdQuestionAttr {
    Table,
    QuaCode,
    QuaName,
    QuaType,
}

#[derive(DeriveIden)]
pub enum MwdQuestionExplain {
    Table,
    QeSeq,
    QuaCode,
    QueOrder,
    QueExplain,
}
