//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::order::{NewOrder, Order};
use crate::domain::types::{ClientId, OrderId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, OrderQuery, OrderReader, OrderWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn client_exists(&self, id: ClientId) -> RepositoryResult<bool>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    }

    impl OrderReader for Repository {
        fn get_order_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>>;
        fn order_exists(&self, id: OrderId) -> RepositoryResult<bool>;
        fn search_orders(&self, query: &OrderQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }

    impl OrderWriter for Repository {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    }
}
