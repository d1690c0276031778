//! Diesel models for stored orders.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};
use crate::domain::types::{OrderId, TypeConstraintError};
use crate::models::client::Client;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Client, foreign_key = client_id))]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Order {
    pub id: Vec<u8>, // uuid bytes
    pub client_id: i64,
    pub order_date: NaiveDateTime,
    pub status: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub id: Vec<u8>,
    pub client_id: i64,
    pub order_date: NaiveDateTime,
    pub status: &'static str,
}

impl NewOrder {
    /// Pairs a validated domain order with the identifier assigned on insert.
    pub fn new(id: OrderId, order: &DomainNewOrder) -> Self {
        Self {
            id: id.as_bytes().to_vec(),
            client_id: order.client_id.get(),
            order_date: order.order_date,
            status: order.status.as_str(),
        }
    }
}

impl TryFrom<Order> for DomainOrder {
    type Error = TypeConstraintError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        DomainOrder::try_new(&order.id, order.client_id, order.order_date, &order.status)
    }
}
