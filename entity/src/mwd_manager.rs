use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_manager")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub mg_seq: i32,
    #[sea_orm(unique)]
    pub mg_email: String,
    pub mg_pw: String,
    pub mg_name: String,
    pub mg_use: bool,
    pub mg_perm_account: bool,
    pub mg_perm_institute: bool,
    pub mg_perm_manager: bool,
    pub mg_perm_result: bool,
    pub mg_insert_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mwd_manager_login_log::Entity")]
    MwdManagerLoginLog,
}

impl Related<super::mwd_manager_login_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdManagerLoginLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
