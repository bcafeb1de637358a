//! Data transfer objects shared by the HTTP API.
//!
//! Every type here is serialized as camelCase JSON and documented with `ToSchema` so it
//! appears in the generated OpenAPI document.

pub mod account;
pub mod api;
pub mod auth;
pub mod individual;
pub mod institute;
pub mod manager;
pub mod result;
