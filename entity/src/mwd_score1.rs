use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mwd_score1")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sc1_seq: i32,
    pub anp_seq: i32,
    pub sc1_step: String,
    pub qua_code: String,
    pub sc1_score: f64,
    pub sc1_rank: i32,
    pub sc1_rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
