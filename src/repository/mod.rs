use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient},
        order::{NewOrder, Order},
        types::{ClientId, OrderId},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod order;
pub mod order_query;

pub use order_query::{OrderPredicate, OrderQuery, SortKey};

/// Diesel-backed store shared by every request handler.
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn client_exists(&self, id: ClientId) -> RepositoryResult<bool>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
}

pub trait OrderReader {
    fn get_order_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>>;
    fn order_exists(&self, id: OrderId) -> RepositoryResult<bool>;
    /// Executes a built query returning the total match count and the requested page.
    fn search_orders(&self, query: &OrderQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}

pub trait OrderWriter {
    /// Persists a validated order and returns it with its assigned identifier.
    ///
    /// Implementations must reject orders whose client does not exist with
    /// [`errors::RepositoryError::ForeignKeyViolation`].
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
}
