use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_question_attr")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub qua_code: String,
    pub qua_name: String,
    pub qua_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
