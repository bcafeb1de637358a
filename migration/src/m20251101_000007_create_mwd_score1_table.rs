use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MwdScore1::Table)
                    .if_not_exists()
                    .col(pk_auto(MwdScore1::Sc1Seq))
                    .col(integer(MwdScore1::AnpSeq))
                    .col(string_len(MwdScore1::Sc1Step, 3))
                    .col(string(MwdScore1::QuaCode))
                    .col(double(MwdScore1::Sc1Score))
                    .col(integer(MwdScore1::Sc1Rank))
                    .col(double(MwdScore1::Sc1Rate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mwd_score1_anp_seq_step")
                    .table(MwdScore1::Table)
                    .col(MwdScore1::AnpSeq)
                    .col(MwdScore1::Sc1Step)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MwdScore1::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MwdScore1 {
    Table,
    Sc1Seq,
    AnpSeq,
    Sc1Step,
    QuaCode,
    Sc1Score,
    Sc1Rank,
    Sc1Rate,
}
