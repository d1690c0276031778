//! Database models shared across the orders repository.

pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod order;
