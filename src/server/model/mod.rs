//! Domain models and operation-specific parameter types.
//!
//! Repositories convert entity rows into these models at the data boundary, services
//! operate on them, and controllers convert them into DTOs with `into_dto`.

pub mod account;
pub mod institute;
pub mod manager;
pub mod pagination;
pub mod result;
pub mod session;
