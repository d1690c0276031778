//! Domain aggregates exposed by the orders service layer.

pub mod client;
pub mod order;
pub mod order_filter;
pub mod types;
