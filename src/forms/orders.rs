use serde::Deserialize;

/// Payload for placing an order.
///
/// Both fields are optional at the wire level so that a missing value is
/// reported as a validation error instead of a deserialization failure. There
/// is no date field: the order date is assigned by the server and anything a
/// caller sends under that name is ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewOrderForm {
    pub client_id: Option<i64>,
    pub status: Option<String>,
}
