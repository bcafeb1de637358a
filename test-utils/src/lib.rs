//! Octagnosis Admin Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the admin
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases populated with the `mwd_*` tables the test needs.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_accounts() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_account_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let (person, account) = factory::account::create_account(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
