//! Search criteria accepted by the order listing.
//!
//! [`OrderFilters`] is the raw, caller-supplied shape where every field is
//! optional. [`FilterCriteria::normalize`] resolves it into a value that is
//! always safe to hand to the query builder: pagination is defaulted into a
//! valid window and the sort column is one of [`OrderSortField`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::order::OrderStatus;
use crate::domain::types::{OrderId, TypeConstraintError};

/// Lines per page used when the caller omits the value or sends a non-positive one.
pub const DEFAULT_LINES_PER_PAGE: usize = 10;
/// Upper bound for a single page.
pub const MAX_LINES_PER_PAGE: usize = 100;

/// Raw search parameters as received from a caller.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrderFilters {
    pub id: Option<OrderId>,
    pub client_id: Option<i64>,
    pub date_start: Option<NaiveDateTime>,
    pub date_end: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub lines_per_page: Option<i64>,
    pub order_by: Option<String>,
    pub direction: Option<String>,
}

/// Columns an order search may be sorted by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderSortField {
    Id,
    ClientId,
    #[default]
    OrderDate,
    Status,
}

impl OrderSortField {
    /// Matches a column name ignoring case, `_` and `-`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "id" => Some(OrderSortField::Id),
            "clientid" => Some(OrderSortField::ClientId),
            "orderdate" => Some(OrderSortField::OrderDate),
            "status" => Some(OrderSortField::Status),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Asc),
            "desc" | "descending" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Normalized order search constraints plus pagination and sort parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterCriteria {
    pub id: Option<OrderId>,
    /// Raw client id; a non-positive value simply matches nothing.
    pub client_id: Option<i64>,
    pub date_start: Option<NaiveDateTime>,
    pub date_end: Option<NaiveDateTime>,
    pub status: Option<OrderStatus>,
    /// Zero-based page number.
    pub page: usize,
    pub lines_per_page: usize,
    pub order_by: OrderSortField,
    pub direction: SortDirection,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            id: None,
            client_id: None,
            date_start: None,
            date_end: None,
            status: None,
            page: 0,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            order_by: OrderSortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl FilterCriteria {
    /// Resolves raw filters into criteria.
    ///
    /// Only a status filter that names no known status fails; blank status
    /// text is treated as absent.
    pub fn normalize(raw: OrderFilters) -> Result<Self, TypeConstraintError> {
        let status = match raw.status.as_deref() {
            Some(text) if !text.trim().is_empty() => Some(OrderStatus::parse(text)?),
            _ => None,
        };

        let page = raw
            .page
            .and_then(|page| usize::try_from(page).ok())
            .unwrap_or(0);

        let lines_per_page = raw
            .lines_per_page
            .filter(|size| *size > 0)
            .and_then(|size| usize::try_from(size).ok())
            .map_or(DEFAULT_LINES_PER_PAGE, |size| size.min(MAX_LINES_PER_PAGE));

        let order_by = raw
            .order_by
            .as_deref()
            .and_then(OrderSortField::from_name)
            .unwrap_or_default();

        let direction = raw
            .direction
            .as_deref()
            .and_then(SortDirection::from_name)
            .unwrap_or_default();

        Ok(Self {
            id: raw.id,
            client_id: raw.client_id,
            date_start: raw.date_start,
            date_end: raw.date_end,
            status,
            page,
            lines_per_page,
            order_by,
            direction,
        })
    }
}
