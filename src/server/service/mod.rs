//! Business logic between controllers and repositories.
//!
//! Services validate input, orchestrate repository calls and assemble domain models.
//! They return `AppError` so controllers can propagate failures with `?`.

pub mod account;
pub mod auth;
pub mod institute;
pub mod manager;
pub mod result;
pub mod session;

#[cfg(test)]
mod test;
