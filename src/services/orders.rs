use chrono::{NaiveDateTime, Utc};

use crate::domain::order::{NewOrder, Order, OrderStatus};
use crate::domain::order_filter::{FilterCriteria, OrderFilters};
use crate::domain::types::{ClientId, OrderId};
use crate::forms::orders::NewOrderForm;
use crate::pagination::Page;
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientReader, OrderQuery, OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};

/// Order that passed every admissibility rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub client_id: ClientId,
    pub status: OrderStatus,
    /// Moment validation succeeded; becomes the order date.
    pub order_date: NaiveDateTime,
}

impl From<ValidatedOrder> for NewOrder {
    fn from(order: ValidatedOrder) -> Self {
        NewOrder::new(order.client_id, order.order_date, order.status)
    }
}

/// Checks that an order may be created.
///
/// Rules run in a fixed order and stop at the first failure: client id
/// presence, client existence, then status. Client errors therefore win when
/// both the client and the status are wrong.
pub fn validate_for_create<R>(
    repo: &R,
    client_id: Option<i64>,
    status: Option<&str>,
) -> ServiceResult<ValidatedOrder>
where
    R: ClientReader + ?Sized,
{
    let raw_client_id = client_id.ok_or(ServiceError::MissingClientId)?;

    // A non-positive id cannot belong to any client.
    let client_id =
        ClientId::new(raw_client_id).map_err(|_| ServiceError::UnknownClient(raw_client_id))?;

    let client_found = repo.client_exists(client_id).map_err(|err| {
        log::error!("Failed to check client {client_id}: {err}");
        ServiceError::from(err)
    })?;
    if !client_found {
        return Err(ServiceError::UnknownClient(raw_client_id));
    }

    let status = OrderStatus::parse(status.unwrap_or_default())?;

    Ok(ValidatedOrder {
        client_id,
        status,
        order_date: Utc::now().naive_utc(),
    })
}

/// Validates the request and persists the order with a single store write.
pub fn create_order<R>(repo: &R, form: &NewOrderForm) -> ServiceResult<Order>
where
    R: ClientReader + OrderWriter + ?Sized,
{
    let validated = validate_for_create(repo, form.client_id, form.status.as_deref())?;
    let client_id = validated.client_id;

    repo.create_order(&validated.into()).map_err(|err| match err {
        // The client disappeared after the fast-path check.
        RepositoryError::ForeignKeyViolation(_) => ServiceError::UnknownClient(client_id.get()),
        other => {
            log::error!("Failed to create order for client {client_id}: {other}");
            ServiceError::from(other)
        }
    })
}

/// Ensures the id is present and refers to a stored order.
pub fn validate_existing_id<R>(repo: &R, id: Option<OrderId>) -> ServiceResult<OrderId>
where
    R: OrderReader + ?Sized,
{
    let id = id.ok_or(ServiceError::MissingOrderId)?;

    let found = repo.order_exists(id).map_err(|err| {
        log::error!("Failed to check order {id}: {err}");
        ServiceError::from(err)
    })?;

    if found {
        Ok(id)
    } else {
        Err(ServiceError::UnknownOrder(id))
    }
}

/// Fetches a single order by id.
pub fn get_order<R>(repo: &R, id: Option<OrderId>) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    let id = validate_existing_id(repo, id)?;

    repo.get_order_by_id(id)
        .map_err(|err| {
            log::error!("Failed to load order {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::UnknownOrder(id))
}

/// Runs a filtered, paginated, sorted order search.
///
/// An unknown status filter fails the whole search with
/// [`ServiceError::InvalidStatus`] rather than being silently dropped.
pub fn search_orders<R>(repo: &R, filters: OrderFilters) -> ServiceResult<Page<Order>>
where
    R: OrderReader + ?Sized,
{
    let criteria = FilterCriteria::normalize(filters)?;
    let query = OrderQuery::build(&criteria);

    let (total, orders) = repo.search_orders(&query).map_err(|err| {
        log::error!("Failed to search orders: {err}");
        ServiceError::from(err)
    })?;

    Ok(Page::new(
        orders,
        total,
        criteria.page,
        criteria.lines_per_page,
    ))
}
