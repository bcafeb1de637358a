use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ac_gid: String,
    #[sea_orm(unique)]
    pub ac_id: String,
    pub ac_use: bool,
    pub pe_seq: i32,
    pub ins_seq: Option<i32>,
    pub tur_seq: Option<i32>,
    pub ac_insert_date: DateTimeUtc,
    pub ac_expire_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mwd_person::Entity",
        from = "Column::PeSeq",
        to = "super::mwd_person::Column::PeSeq"
    )]
    MwdPerson,
    #[sea_orm(
        belongs_to = "super::mwd_institute::Entity",
        from = "Column::InsSeq",
        to = "super::mwd_institute::Column::InsSeq"
    )]
    MwdInstitute,
    #[sea_orm(
        belongs_to = "super::mwd_institute_turn::Entity",
        from = "Column::TurSeq",
        to = "super::mwd_institute_turn::Column::TurSeq"
    )]
    MwdInstituteTurn,
    #[sea_orm(has_many = "super::mwd_answer_progress::Entity")]
    MwdAnswerProgress,
}

impl Related<super::mwd_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdPerson.def()
    }
}

impl Related<super::mwd_institute_turn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdInstituteTurn.def()
    }
}

impl Related<super::mwd_answer_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdAnswerProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
