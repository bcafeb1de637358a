//! Test session (`mwd_answer_progress`) data repository.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::{
    pagination::{ListParams, Page},
    session::SessionSummary,
};

/// A session together with the account and person that took it.
pub struct SessionRow {
    pub progress: entity::mwd_answer_progress::Model,
    pub account: entity::mwd_account::Model,
    pub person: entity::mwd_person::Model,
}

/// Repository providing read access to test sessions.
pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    /// Creates a new SessionRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a session with its account and person.
    ///
    /// # Returns
    /// - `Ok(Some(SessionRow))` - Session found
    /// - `Ok(None)` - No session with that id, or its account or person row is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, anp_seq: i32) -> Result<Option<SessionRow>, DbErr> {
        let Some((progress, Some(account))) = entity::prelude::MwdAnswerProgress::find_by_id(anp_seq)
            .find_also_related(entity::prelude::MwdAccount)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let Some(person) = entity::prelude::MwdPerson::find_by_id(account.pe_seq)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(SessionRow {
            progress,
            account,
            person,
        }))
    }

    /// Checks whether a session exists.
    pub async fn exists(&self, anp_seq: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MwdAnswerProgress::find_by_id(anp_seq)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of sessions taken by accounts not attached to any institute.
    ///
    /// The search matches the person name. Sessions are ordered newest first with
    /// `anp_seq` as tie-breaker.
    pub async fn get_individuals_paginated(
        &self,
        params: &ListParams,
    ) -> Result<Page<SessionSummary>, DbErr> {
        let query = entity::prelude::MwdAnswerProgress::find()
            .filter(entity::mwd_account::Column::InsSeq.is_null());

        self.paginate(query, params).await
    }

    /// Gets a page of sessions taken by accounts of one institute turn.
    pub async fn get_turn_paginated(
        &self,
        ins_seq: i32,
        tur_seq: i32,
        params: &ListParams,
    ) -> Result<Page<SessionSummary>, DbErr> {
        let query = entity::prelude::MwdAnswerProgress::find()
            .filter(entity::mwd_account::Column::InsSeq.eq(ins_seq))
            .filter(entity::mwd_account::Column::TurSeq.eq(tur_seq));

        self.paginate(query, params).await
    }

    /// Joins account and person onto a filtered session query and fetches one page.
    async fn paginate(
        &self,
        query: Select<entity::prelude::MwdAnswerProgress>,
        params: &ListParams,
    ) -> Result<Page<SessionSummary>, DbErr> {
        let mut query = query
            .find_also_related(entity::prelude::MwdAccount)
            .join(
                JoinType::InnerJoin,
                entity::mwd_account::Relation::MwdPerson.def(),
            )
            .order_by_desc(entity::mwd_answer_progress::Column::AnpStartDate)
            .order_by_desc(entity::mwd_answer_progress::Column::AnpSeq);

        if let Some(search) = params.search.as_deref() {
            query = query.filter(entity::mwd_person::Column::PeName.contains(search));
        }

        let paginator = query.paginate(self.db, params.per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(params.page).await?;

        let person_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, account)| account.as_ref().map(|a| a.pe_seq))
            .collect();

        let persons: HashMap<i32, entity::mwd_person::Model> = if person_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::MwdPerson::find()
                .filter(entity::mwd_person::Column::PeSeq.is_in(person_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.pe_seq, p))
                .collect()
        };

        let sessions = rows
            .into_iter()
            .filter_map(|(progress, account)| {
                let account = account?;
                let person = persons.get(&account.pe_seq).cloned();
                person.map(|p| SessionSummary::from_entity(progress, account, p))
            })
            .collect();

        Ok(Page::new(sessions, total, params.page, params.per_page))
    }
}
