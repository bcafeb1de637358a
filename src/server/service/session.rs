use sea_orm::DatabaseConnection;

use crate::server::{
    data::{institute::TurnRepository, score::ScoreRepository, session::SessionRepository},
    error::AppError,
    model::{
        pagination::{ListParams, Page},
        session::SessionSummary,
    },
};

/// Individual and group result listings.
pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of sessions taken outside any institute
    pub async fn get_individuals(
        &self,
        params: &ListParams,
    ) -> Result<Page<SessionSummary>, AppError> {
        let page = SessionRepository::new(self.db)
            .get_individuals_paginated(params)
            .await?;

        self.with_tendencies(page).await
    }

    /// Gets a page of sessions taken in one institute turn
    ///
    /// Fails with 404 when the turn does not exist or belongs to another institute.
    pub async fn get_turn_results(
        &self,
        ins_seq: i32,
        tur_seq: i32,
        params: &ListParams,
    ) -> Result<Page<SessionSummary>, AppError> {
        if TurnRepository::new(self.db)
            .find(ins_seq, tur_seq)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Turn not found".to_string()));
        }

        let page = SessionRepository::new(self.db)
            .get_turn_paginated(ins_seq, tur_seq, params)
            .await?;

        self.with_tendencies(page).await
    }

    /// Attaches first and second tendency names to every session of the page.
    async fn with_tendencies(
        &self,
        mut page: Page<SessionSummary>,
    ) -> Result<Page<SessionSummary>, AppError> {
        let ids: Vec<i32> = page.items.iter().map(|s| s.anp_seq).collect();
        let mut tendencies = ScoreRepository::new(self.db)
            .get_tendency_names(&ids)
            .await?;

        for session in page.items.iter_mut() {
            if let Some((first, second)) = tendencies.remove(&session.anp_seq) {
                session.tendency1 = first;
                session.tendency2 = second;
            }
        }

        Ok(page)
    }
}
