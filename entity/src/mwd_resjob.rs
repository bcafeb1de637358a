use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_resjob")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub rej_seq: i32,
    pub anp_seq: i32,
    pub rej_kind: String,
    pub rej_rank: i32,
    pub jo_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
