use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_job_major_map")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub jmm_seq: i32,
    pub jo_code: String,
    pub ma_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
