//! Paging parameters and paged results shared by every listing.

use crate::model::api::PaginatedDto;

/// Parameters of a paginated, optionally filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of rows per page, always at least 1.
    pub per_page: u64,
    /// Substring filter, `None` when absent or blank.
    pub search: Option<String>,
}

impl ListParams {
    /// Largest page size a client may request.
    pub const MAX_PER_PAGE: u64 = 100;

    /// Largest page number accepted. Keeps `page * per_page` within a signed 64-bit offset.
    pub const MAX_PAGE: u64 = i64::MAX as u64 / Self::MAX_PER_PAGE;

    /// Normalizes raw query values: clamps the page number and page size and drops
    /// a blank search.
    pub fn new(page: u64, per_page: u64, search: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            page: page.min(Self::MAX_PAGE),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
            search,
        }
    }
}

/// One page of domain models with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of rows matching the filter across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// Converts the page into its DTO, converting each item with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PaginatedDto<D> {
        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
