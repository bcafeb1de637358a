use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_institute_turn")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub tur_seq: i32,
    pub ins_seq: i32,
    pub tur_code: String,
    pub tur_req_sum: i32,
    pub tur_use_sum: i32,
    pub tur_is_paid: bool,
    pub tur_insert_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mwd_institute::Entity",
        from = "Column::InsSeq",
        to = "super::mwd_institute::Column::InsSeq"
    )]
    MwdInstitute,
}

impl Related<super::mwd_institute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdInstitute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
