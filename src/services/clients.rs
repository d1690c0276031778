use validator::Validate;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::forms::clients::AddClientForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-client form and persists a new client record.
pub fn create_client<R>(repo: &R, form: AddClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let new_client = NewClient::try_from(form)?;

    repo.create_client(&new_client).map_err(|err| match err {
        RepositoryError::ConstraintViolation(_) => ServiceError::Conflict(format!(
            "email already registered: {}",
            new_client.email
        )),
        other => {
            log::error!("Failed to add a client: {other}");
            ServiceError::from(other)
        }
    })
}

/// Fetches a client by its identifier.
pub fn get_client<R>(repo: &R, client_id: i64) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let id = ClientId::new(client_id).map_err(|_| ServiceError::ClientNotFound(client_id))?;

    repo.get_client_by_id(id)
        .map_err(|err| {
            log::error!("Failed to get client {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::ClientNotFound(client_id))
}
