use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mwd_answer_progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub anp_seq: i32,
    pub ac_gid: String,
    pub anp_step: String,
    pub anp_done: bool,
    pub anp_start_date: DateTimeUtc,
    pub anp_end_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mwd_account::Entity",
        from = "Column::AcGid",
        to = "super::mwd_account::Column::AcGid"
    )]
    MwdAccount,
}

impl Related<super::mwd_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MwdAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
