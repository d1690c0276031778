use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Deserialize, Validate)]
/// Payload for registering a new client.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

impl TryFrom<AddClientForm> for NewClient {
    type Error = TypeConstraintError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        NewClient::try_new(form.name, form.email)
    }
}
