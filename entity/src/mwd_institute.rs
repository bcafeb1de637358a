use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_institute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub ins_seq: i32,
    pub ins_name: String,
    pub ins_business_num: Option<String>,
    pub ins_manager_name: String,
    pub ins_manager_email: String,
    pub ins_manager_cellphone: Option<String>,
    pub ins_postal_code: Option<String>,
    pub ins_address: Option<String>,
    pub ins_insert_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mwd_institute_turn::Entity")]
    MwdInstituteTurn,
}

impl Related<super::mwd_institute_turn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdInstituteTurn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
