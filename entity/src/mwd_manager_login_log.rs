use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_manager_login_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub mll_seq: i32,
    pub mg_seq: i32,
    pub mll_ip: Option<String>,
    pub mll_insert_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mwd_manager::Entity",
        from = "Column::MgSeq",
        to = "super::mwd_manager::Column::MgSeq"
    )]
    MwdManager,
}

impl Related<super::mwd_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdManager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
