use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{MwdManager, MwdManagerLoginLog};
///
/// let test = TestBuilder::new()
///     .with_table(MwdManager)
///     .with_table(MwdManagerLoginLog)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference) since SQLite enforces foreign keys.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables behind account, institute and session listings.
    ///
    /// Adds, in dependency order:
    /// - MwdPerson
    /// - MwdInstitute
    /// - MwdInstituteTurn
    /// - MwdAccount
    /// - MwdAnswerProgress
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_account_tables(self) -> Self {
        self.with_table(MwdPerson)
            .with_table(MwdInstitute)
            .with_table(MwdInstituteTurn)
            .with_table(MwdAccount)
            .with_table(MwdAnswerProgress)
    }

    /// Adds every table read by the result aggregation endpoints.
    ///
    /// Equivalent to `with_account_tables()` plus the score, question and job tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_result_tables(self) -> Self {
        self.with_account_tables()
            .with_table(MwdQuestionAttr)
            .with_table(MwdQuestionExplain)
            .with_table(MwdScore1)
            .with_table(MwdJob)
            .with_table(MwdMajor)
            .with_table(MwdJobMajorMap)
            .with_table(MwdResjob)
    }

    /// Adds the manager and login-log tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_manager_tables(self) -> Self {
        self.with_table(MwdManager).with_table(MwdManagerLoginLog)
    }

    /// Adds every table of the schema.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_result_tables().with_manager_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
