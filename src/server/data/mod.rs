//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every user-supplied value reaches the database as a bound parameter of the SeaORM
//! query builder, and multi-statement writes run inside one transaction.

pub mod account;
pub mod institute;
pub mod manager;
pub mod score;
pub mod session;

#[cfg(test)]
mod test;
