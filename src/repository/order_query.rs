//! Store-agnostic description of an order search.
//!
//! [`OrderQuery::build`] turns normalized [`FilterCriteria`] into conjunctive
//! predicates, an ordered list of sort keys and an offset/limit window. Stores
//! execute the description as-is.

use chrono::NaiveDateTime;

use crate::domain::order::OrderStatus;
use crate::domain::order_filter::{FilterCriteria, OrderSortField, SortDirection};
use crate::domain::types::OrderId;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderPredicate {
    IdEq(OrderId),
    ClientIdEq(i64),
    /// `order_date >= start`
    OrderDateFrom(NaiveDateTime),
    /// `order_date <= end`
    OrderDateTo(NaiveDateTime),
    StatusEq(OrderStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: OrderSortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuery {
    /// Combined with AND; empty means every order matches.
    pub predicates: Vec<OrderPredicate>,
    /// Primary key first, then the id tie-breaker.
    pub sort: Vec<SortKey>,
    pub offset: usize,
    pub limit: usize,
}

impl OrderQuery {
    pub fn build(criteria: &FilterCriteria) -> Self {
        let mut predicates = Vec::new();

        if let Some(id) = criteria.id {
            predicates.push(OrderPredicate::IdEq(id));
        }
        if let Some(client_id) = criteria.client_id {
            predicates.push(OrderPredicate::ClientIdEq(client_id));
        }
        if let Some(start) = criteria.date_start {
            predicates.push(OrderPredicate::OrderDateFrom(start));
        }
        if let Some(end) = criteria.date_end {
            predicates.push(OrderPredicate::OrderDateTo(end));
        }
        if let Some(status) = criteria.status {
            predicates.push(OrderPredicate::StatusEq(status));
        }

        let mut sort = vec![SortKey {
            field: criteria.order_by,
            direction: criteria.direction,
        }];
        // Ties on the primary key would otherwise shuffle rows between pages.
        if criteria.order_by != OrderSortField::Id {
            sort.push(SortKey {
                field: OrderSortField::Id,
                direction: SortDirection::Asc,
            });
        }

        Self {
            predicates,
            sort,
            offset: criteria.page.saturating_mul(criteria.lines_per_page),
            limit: criteria.lines_per_page,
        }
    }

    /// Offset clamped to the signed range SQL engines accept.
    pub fn offset_i64(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }

    pub fn limit_i64(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}
