//! Institute and institute turn data repositories.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::model::{
    institute::{CreateTurnParams, Institute, SaveInstituteParams, Turn},
    pagination::{ListParams, Page},
};

/// Repository providing database operations for institutes.
pub struct InstituteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstituteRepository<'a> {
    /// Creates a new InstituteRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new institute.
    pub async fn create(&self, params: SaveInstituteParams) -> Result<Institute, DbErr> {
        let entity = entity::mwd_institute::ActiveModel {
            ins_name: ActiveValue::Set(params.name),
            ins_business_num: ActiveValue::Set(params.business_num),
            ins_manager_name: ActiveValue::Set(params.manager_name),
            ins_manager_email: ActiveValue::Set(params.manager_email),
            ins_manager_cellphone: ActiveValue::Set(params.manager_cellphone),
            ins_postal_code: ActiveValue::Set(params.postal_code),
            ins_address: ActiveValue::Set(params.address),
            ins_insert_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Institute::from_entity(entity, 0))
    }

    /// Finds an institute with its turn count.
    ///
    /// # Returns
    /// - `Ok(Some(Institute))` - Institute found
    /// - `Ok(None)` - No institute with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, ins_seq: i32) -> Result<Option<Institute>, DbErr> {
        let Some(entity) = entity::prelude::MwdInstitute::find_by_id(ins_seq)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let turn_count = entity::prelude::MwdInstituteTurn::find()
            .filter(entity::mwd_institute_turn::Column::InsSeq.eq(ins_seq))
            .count(self.db)
            .await?;

        Ok(Some(Institute::from_entity(entity, turn_count)))
    }

    /// Checks whether an institute exists.
    pub async fn exists(&self, ins_seq: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MwdInstitute::find_by_id(ins_seq)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of institutes, newest first, each with its turn count.
    ///
    /// The search matches the institute name or contact name.
    pub async fn get_paginated(&self, params: &ListParams) -> Result<Page<Institute>, DbErr> {
        let mut query = entity::prelude::MwdInstitute::find()
            .order_by_desc(entity::mwd_institute::Column::InsInsertDate)
            .order_by_desc(entity::mwd_institute::Column::InsSeq);

        if let Some(search) = params.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(entity::mwd_institute::Column::InsName.contains(search))
                    .add(entity::mwd_institute::Column::InsManagerName.contains(search)),
            );
        }

        let paginator = query.paginate(self.db, params.per_page);
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.page).await?;

        let ids: Vec<i32> = entities.iter().map(|e| e.ins_seq).collect();
        let counts = self.turn_counts(ids).await?;

        let institutes = entities
            .into_iter()
            .map(|e| {
                let count = counts.get(&e.ins_seq).copied().unwrap_or(0);
                Institute::from_entity(e, count)
            })
            .collect();

        Ok(Page::new(institutes, total, params.page, params.per_page))
    }

    /// Updates an institute's details.
    ///
    /// # Returns
    /// - `Ok(true)` - Institute updated
    /// - `Ok(false)` - No institute with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, ins_seq: i32, params: SaveInstituteParams) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::MwdInstitute::find_by_id(ins_seq)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::mwd_institute::ActiveModel = existing.into();
        active.ins_name = ActiveValue::Set(params.name);
        active.ins_business_num = ActiveValue::Set(params.business_num);
        active.ins_manager_name = ActiveValue::Set(params.manager_name);
        active.ins_manager_email = ActiveValue::Set(params.manager_email);
        active.ins_manager_cellphone = ActiveValue::Set(params.manager_cellphone);
        active.ins_postal_code = ActiveValue::Set(params.postal_code);
        active.ins_address = ActiveValue::Set(params.address);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes an institute in one transaction.
    ///
    /// Detaches its accounts (institute and turn set to null), deletes its turns and
    /// deletes the institute. Accounts are detached first so no account references a
    /// deleted turn. Accounts and their results are kept.
    ///
    /// # Returns
    /// - `Ok(true)` - Institute deleted
    /// - `Ok(false)` - No institute with that id
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, ins_seq: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::MwdInstitute::find_by_id(ins_seq)
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        entity::prelude::MwdAccount::update_many()
            .col_expr(
                entity::mwd_account::Column::InsSeq,
                Expr::value(sea_orm::Value::Int(None)),
            )
            .col_expr(
                entity::mwd_account::Column::TurSeq,
                Expr::value(sea_orm::Value::Int(None)),
            )
            .filter(entity::mwd_account::Column::InsSeq.eq(ins_seq))
            .exec(&txn)
            .await?;

        entity::prelude::MwdInstituteTurn::delete_many()
            .filter(entity::mwd_institute_turn::Column::InsSeq.eq(ins_seq))
            .exec(&txn)
            .await?;

        entity::prelude::MwdInstitute::delete_by_id(ins_seq)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Counts the turns of each given institute.
    async fn turn_counts(&self, ins_seqs: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        if ins_seqs.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::MwdInstituteTurn::find()
            .select_only()
            .column(entity::mwd_institute_turn::Column::InsSeq)
            .column_as(
                Expr::col(entity::mwd_institute_turn::Column::TurSeq).count(),
                "turn_count",
            )
            .filter(entity::mwd_institute_turn::Column::InsSeq.is_in(ins_seqs))
            .group_by(entity::mwd_institute_turn::Column::InsSeq)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(ins_seq, count)| (ins_seq, count.max(0) as u64))
            .collect())
    }
}

/// Repository providing database operations for institute turns.
pub struct TurnRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TurnRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all turns of an institute, newest first.
    pub async fn get_by_institute(&self, ins_seq: i32) -> Result<Vec<Turn>, DbErr> {
        let entities = entity::prelude::MwdInstituteTurn::find()
            .filter(entity::mwd_institute_turn::Column::InsSeq.eq(ins_seq))
            .order_by_desc(entity::mwd_institute_turn::Column::TurInsertDate)
            .order_by_desc(entity::mwd_institute_turn::Column::TurSeq)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Turn::from_entity).collect())
    }

    /// Finds a turn, only if it belongs to the given institute.
    pub async fn find(&self, ins_seq: i32, tur_seq: i32) -> Result<Option<Turn>, DbErr> {
        let entity = entity::prelude::MwdInstituteTurn::find_by_id(tur_seq)
            .filter(entity::mwd_institute_turn::Column::InsSeq.eq(ins_seq))
            .one(self.db)
            .await?;

        Ok(entity.map(Turn::from_entity))
    }

    /// Inserts a new turn with no seats used.
    pub async fn create(&self, params: CreateTurnParams) -> Result<Turn, DbErr> {
        let entity = entity::mwd_institute_turn::ActiveModel {
            ins_seq: ActiveValue::Set(params.ins_seq),
            tur_code: ActiveValue::Set(params.code),
            tur_req_sum: ActiveValue::Set(params.requested_seats),
            tur_use_sum: ActiveValue::Set(0),
            tur_is_paid: ActiveValue::Set(params.paid),
            tur_insert_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Turn::from_entity(entity))
    }
}
