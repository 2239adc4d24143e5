//! Shared list-endpoint plumbing: paging, keyword, time window and ordering.

use crate::time_range::parse_timestamp;
use crate::{AllowedColumn, DomainError, SortOrder};
use chrono::NaiveDateTime;
use serde::Serialize;

pub const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub now_page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageRequest {
    pub fn new(now_page: Option<u32>, page_size: Option<u32>) -> Result<Self, DomainError> {
        if now_page == Some(0) {
            return Err(DomainError::Validation("nowPage starts at 1".to_string()));
        }
        if let Some(size) = page_size {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(DomainError::Validation(format!(
                    "pageSize must be between 1 and {}",
                    MAX_PAGE_SIZE
                )));
            }
        }
        Ok(Self {
            now_page,
            page_size,
        })
    }

    /// `(limit, offset)` when both paging parameters were supplied. Computed in
    /// `u64`, so any `nowPage` up to `u32::MAX` yields an in-range offset.
    pub fn limit_offset(&self) -> Option<(u64, u64)> {
        match (self.now_page, self.page_size) {
            (Some(page), Some(size)) => {
                let size = u64::from(size);
                Some((size, u64::from(page).saturating_sub(1) * size))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub now_page: Option<u32>,
    pub page_size: Option<u32>,
    pub has_more: bool,
    pub total: u64,
    pub rows: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(rows: Vec<T>, total: u64, request: PageRequest) -> Self {
        let has_more = match request.limit_offset() {
            Some((limit, offset)) => offset + limit < total,
            None => false,
        };
        Self {
            now_page: request.now_page,
            page_size: request.page_size,
            has_more,
            total,
            rows,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            now_page: self.now_page,
            page_size: self.page_size,
            has_more: self.has_more,
            total: self.total,
            rows: self.rows.into_iter().map(f).collect(),
        }
    }
}

crate::allowed_columns! {
    /// Columns a list endpoint may filter by time window (`rangTimeType`).
    pub enum TimeColumn {
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
    }
}

/// Exclusive `(start, end)` window on a timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFilter {
    pub column: TimeColumn,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeFilter {
    /// Applied only when the column and both bounds are present.
    pub fn from_params(
        column: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Option<Self>, DomainError> {
        fn non_blank(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }
        let (Some(column), Some(start), Some(end)) =
            (non_blank(column), non_blank(start), non_blank(end))
        else {
            return Ok(None);
        };

        let column = TimeColumn::from_name(column)
            .ok_or_else(|| DomainError::InvalidSortField(column.to_string()))?;

        Ok(Some(Self {
            column,
            start: parse_timestamp(start)?,
            end: parse_timestamp(end)?,
        }))
    }
}

/// Everything a paged list query needs besides the entity-specific filter.
#[derive(Debug, Clone)]
pub struct ListQuery<C, F> {
    pub filter: F,
    pub keyword: Option<String>,
    pub order: Option<SortOrder<C>>,
    pub time_filter: Option<TimeFilter>,
    pub page: PageRequest,
}

impl<C: AllowedColumn, F> ListQuery<C, F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            keyword: None,
            order: None,
            time_filter: None,
            page: PageRequest::default(),
        }
    }
}
