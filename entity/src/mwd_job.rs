use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub jo_code: String,
    pub jo_name: String,
    pub jo_outline: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
