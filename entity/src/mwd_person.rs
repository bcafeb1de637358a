use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pe_seq: i32,
    pub pe_name: String,
    pub pe_birth_year: i32,
    pub pe_birth_month: i32,
    pub pe_birth_day: i32,
    pub pe_sex: String,
    pub pe_email: String,
    pub pe_cellphone: String,
    pub pe_school_name: Option<String>,
    pub pe_school_major: Option<String>,
    pub pe_job_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mwd_account::Entity")]
    MwdAccount,
}

impl Related<super::mwd_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
