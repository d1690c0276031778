//! Request bodies accepted by the JSON routes.

pub mod clients;
pub mod orders;
