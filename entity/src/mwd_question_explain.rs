use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_question_explain")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub qe_seq: i32,
    pub qua_code: String,
    pub que_order: i32,
    pub que_explain: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
