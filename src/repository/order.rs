//! Repository implementation for orders.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        order::{NewOrder, Order},
        order_filter::{OrderSortField, SortDirection},
        types::OrderId,
    },
    models::order::{NewOrder as DbNewOrder, Order as DbOrder},
    repository::{
        DieselRepository, OrderPredicate, OrderQuery, OrderReader, OrderWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order> {
        use crate::schema::{clients, orders};

        let mut conn = self.conn()?;
        let client_id = new_order.client_id.get();
        let insertable = DbNewOrder::new(OrderId::new(), new_order);

        // IMMEDIATE takes the write lock up front so the client cannot be
        // removed between the existence check and the insert.
        let db_order = conn.immediate_transaction::<DbOrder, RepositoryError, _>(|conn| {
            let client_found = diesel::select(exists(clients::table.find(client_id)))
                .get_result::<bool>(conn)?;
            if !client_found {
                return Err(RepositoryError::ForeignKeyViolation(format!(
                    "client {client_id} does not exist"
                )));
            }

            let db_order = diesel::insert_into(orders::table)
                .values(&insertable)
                .get_result::<DbOrder>(conn)?;
            Ok(db_order)
        })?;

        Order::try_from(db_order).map_err(RepositoryError::from)
    }
}

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_order = orders::table
            .find(id.as_bytes().to_vec())
            .first::<DbOrder>(&mut conn)
            .optional()?;

        db_order
            .map(|order| Order::try_from(order).map_err(RepositoryError::from))
            .transpose()
    }

    fn order_exists(&self, id: OrderId) -> RepositoryResult<bool> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(orders::table.find(id.as_bytes().to_vec())))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn search_orders(&self, query: &OrderQuery) -> RepositoryResult<(usize, Vec<Order>)> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = orders::table.into_boxed::<Sqlite>();

            for predicate in &query.predicates {
                items = match predicate {
                    OrderPredicate::IdEq(id) => items.filter(orders::id.eq(id.as_bytes().to_vec())),
                    OrderPredicate::ClientIdEq(client_id) => {
                        items.filter(orders::client_id.eq(*client_id))
                    }
                    OrderPredicate::OrderDateFrom(start) => {
                        items.filter(orders::order_date.ge(*start))
                    }
                    OrderPredicate::OrderDateTo(end) => items.filter(orders::order_date.le(*end)),
                    OrderPredicate::StatusEq(status) => {
                        items.filter(orders::status.eq(status.as_str()))
                    }
                };
            }
            items
        };

        // Get the total count before applying pagination
        let total = query_builder().count().get_result::<i64>(&mut conn)?;

        let mut items = query_builder();
        for key in &query.sort {
            items = match (key.field, key.direction) {
                (OrderSortField::Id, SortDirection::Asc) => items.then_order_by(orders::id.asc()),
                (OrderSortField::Id, SortDirection::Desc) => {
                    items.then_order_by(orders::id.desc())
                }
                (OrderSortField::ClientId, SortDirection::Asc) => {
                    items.then_order_by(orders::client_id.asc())
                }
                (OrderSortField::ClientId, SortDirection::Desc) => {
                    items.then_order_by(orders::client_id.desc())
                }
                (OrderSortField::OrderDate, SortDirection::Asc) => {
                    items.then_order_by(orders::order_date.asc())
                }
                (OrderSortField::OrderDate, SortDirection::Desc) => {
                    items.then_order_by(orders::order_date.desc())
                }
                (OrderSortField::Status, SortDirection::Asc) => {
                    items.then_order_by(orders::status.asc())
                }
                (OrderSortField::Status, SortDirection::Desc) => {
                    items.then_order_by(orders::status.desc())
                }
            };
        }

        let db_orders = items
            .offset(query.offset_i64())
            .limit(query.limit_i64())
            .load::<DbOrder>(&mut conn)?;

        let orders = db_orders
            .into_iter()
            .map(|order| Order::try_from(order).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, orders))
    }
}
