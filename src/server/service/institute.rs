use sea_orm::DatabaseConnection;

use crate::server::{
    data::institute::{InstituteRepository, TurnRepository},
    error::AppError,
    model::{
        institute::{CreateTurnParams, Institute, SaveInstituteParams, Turn},
        pagination::{ListParams, Page},
    },
};

pub struct InstituteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstituteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an institute after checking required fields
    pub async fn create(&self, params: SaveInstituteParams) -> Result<Institute, AppError> {
        validate(&params)?;

        let institute = InstituteRepository::new(self.db).create(params).await?;

        tracing::info!("Created institute {}", institute.ins_seq);

        Ok(institute)
    }

    /// Gets one institute or fails with 404
    pub async fn get_by_id(&self, ins_seq: i32) -> Result<Institute, AppError> {
        InstituteRepository::new(self.db)
            .find_by_id(ins_seq)
            .await?
            .ok_or_else(not_found)
    }

    /// Gets a page of institutes matching the search
    pub async fn get_paginated(&self, params: &ListParams) -> Result<Page<Institute>, AppError> {
        Ok(InstituteRepository::new(self.db)
            .get_paginated(params)
            .await?)
    }

    /// Updates an institute and returns it
    pub async fn update(
        &self,
        ins_seq: i32,
        params: SaveInstituteParams,
    ) -> Result<Institute, AppError> {
        validate(&params)?;

        if !InstituteRepository::new(self.db)
            .update(ins_seq, params)
            .await?
        {
            return Err(not_found());
        }

        self.get_by_id(ins_seq).await
    }

    /// Deletes an institute and its turns, detaching its accounts
    pub async fn delete(&self, ins_seq: i32) -> Result<(), AppError> {
        if !InstituteRepository::new(self.db).delete(ins_seq).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted institute {}", ins_seq);

        Ok(())
    }

    /// Gets the turns of an existing institute, newest first
    pub async fn get_turns(&self, ins_seq: i32) -> Result<Vec<Turn>, AppError> {
        if !InstituteRepository::new(self.db).exists(ins_seq).await? {
            return Err(not_found());
        }

        Ok(TurnRepository::new(self.db)
            .get_by_institute(ins_seq)
            .await?)
    }

    /// Creates a turn for an existing institute
    pub async fn create_turn(&self, params: CreateTurnParams) -> Result<Turn, AppError> {
        if params.code.is_empty() {
            return Err(AppError::BadRequest("Turn code is required".to_string()));
        }
        if params.requested_seats < 0 {
            return Err(AppError::BadRequest(
                "Requested seats cannot be negative".to_string(),
            ));
        }

        if !InstituteRepository::new(self.db)
            .exists(params.ins_seq)
            .await?
        {
            return Err(not_found());
        }

        Ok(TurnRepository::new(self.db).create(params).await?)
    }
}

fn validate(params: &SaveInstituteParams) -> Result<(), AppError> {
    match params.missing_field() {
        Some(field) => Err(AppError::BadRequest(format!("{} is required", field))),
        None => Ok(()),
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Institute not found".to_string())
}
