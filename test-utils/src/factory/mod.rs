//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating `mwd_*` rows with sensible defaults,
//! reducing boilerplate in tests. Factories take the keys of the rows they depend on, and
//! `helpers` offers shortcuts that create a whole dependency chain at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let manager = factory::manager::create_manager(&db).await?;
//!
//!     // Create a test session with its account and person
//!     let (person, account, progress) =
//!         factory::helpers::create_session_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let person = factory::person::PersonFactory::new(&db)
//!     .name("Kim Minji")
//!     .email("minji@example.com")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `person` - Create person entities
//! - `account` - Create account entities
//! - `answer_progress` - Create test session entities
//! - `institute` - Create institute and institute turn entities
//! - `score` - Create question attributes, explanations and score rows
//! - `job` - Create jobs, majors, job-major mappings and suitable-job rows
//! - `manager` - Create manager and login-log entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod account;
pub mod answer_progress;
pub mod helpers;
pub mod institute;
pub mod job;
pub mod manager;
pub mod person;
pub mod score;

pub use account::create_account;
pub use answer_progress::create_answer_progress;
pub use institute::{create_institute, create_turn};
pub use manager::create_manager;
pub use person::create_person;
pub use score::{create_question_attr, create_score};
