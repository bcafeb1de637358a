use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Envelope of every successful request carrying data.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ApiResponseDto<T> {
    /// Always `true`.
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponseDto<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of successful requests that carry no data, such as deletes.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// One page of a listing.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    /// Number of rows matching the filter across all pages.
    pub total: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
