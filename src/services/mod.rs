pub mod clients;
pub mod errors;
pub mod orders;

pub use errors::{ServiceError, ServiceResult};
