//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert request DTOs into service
//! parameters, call a service and convert the returned domain model into a response DTO.

pub mod account;
pub mod auth;
pub mod individual;
pub mod institute;
pub mod manager;

use axum::http::HeaderMap;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::pagination::ListParams;

/// Query parameters accepted by every listing endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, at most 100)
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Optional substring filter
    #[serde(default)]
    pub search: Option<String>,
}

fn default_entries() -> u64 {
    10
}

impl ListQuery {
    pub fn into_params(self) -> ListParams {
        ListParams::new(self.page, self.entries, self.search)
    }
}

/// Client address as reported by the reverse proxy in front of the API.
pub(crate) fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    forwarded.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
    })
}
