use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, OrderId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub client_id: ClientId,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
}

impl Order {
    /// Builds an order from raw storage values.
    pub fn try_new(
        id: &[u8],
        client_id: i64,
        order_date: NaiveDateTime,
        status: &str,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: OrderId::from_bytes(id)?,
            client_id: ClientId::new(client_id)?,
            order_date,
            status: OrderStatus::parse(status)?,
        })
    }
}

/// Order that passed validation and is ready to be persisted.
///
/// The identifier is assigned by the store on insert; `order_date` is the
/// moment validation succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub client_id: ClientId,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
}

impl NewOrder {
    #[must_use]
    pub fn new(client_id: ClientId, order_date: NaiveDateTime, status: OrderStatus) -> Self {
        Self {
            client_id,
            order_date,
            status,
        }
    }
}

/// Closed set of order lifecycle states.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ];

    /// Canonical upper-case name, also used as the stored value.
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
        }
    }

    /// Parses free-form text into a status.
    ///
    /// All whitespace is removed and the remainder upper-cased before matching,
    /// so `" pen ding "` parses as [`OrderStatus::Pending`]. The error for an
    /// unknown status carries the text exactly as received.
    pub fn parse(text: &str) -> Result<Self, TypeConstraintError> {
        if text.trim().is_empty() {
            return Err(TypeConstraintError::MissingStatus);
        }

        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| TypeConstraintError::InvalidStatus(text.to_string()))
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        for input in ["  pending ", "PENDING", "PeNdInG", "pen\tding", " P E N D I N G "] {
            assert_eq!(OrderStatus::parse(input), Ok(OrderStatus::Pending), "{input:?}");
        }
    }

    #[test]
    fn parse_blank_is_missing() {
        assert_eq!(OrderStatus::parse(""), Err(TypeConstraintError::MissingStatus));
        assert_eq!(
            OrderStatus::parse("   "),
            Err(TypeConstraintError::MissingStatus)
        );
        assert_eq!(
            OrderStatus::parse("\n\t"),
            Err(TypeConstraintError::MissingStatus)
        );
    }

    #[test]
    fn parse_unknown_echoes_original_text() {
        let err = OrderStatus::parse("BOGUS").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidStatus("BOGUS".to_string()));
        assert!(err.to_string().contains("BOGUS"));

        let err = OrderStatus::parse(" not real ").unwrap_err();
        assert_eq!(
            err,
            TypeConstraintError::InvalidStatus(" not real ".to_string())
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn serializes_as_canonical_name() {
        let json = serde_json::to_string(&OrderStatus::Canceled).unwrap();
        assert_eq!(json, "\"CANCELED\"");
    }
}
