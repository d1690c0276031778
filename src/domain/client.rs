use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, ClientId, ClientName, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub email: ClientEmail,
    pub created_at: NaiveDateTime,
}

impl Client {
    /// Builds a client from raw storage values, re-validating the invariants.
    pub fn try_new(
        id: i64,
        name: String,
        email: String,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: ClientId::new(id)?,
            name: ClientName::new(name)?,
            email: ClientEmail::new(email)?,
            created_at,
        })
    }
}

#[derive(Clone, Debug)]
pub struct NewClient {
    pub name: ClientName,
    pub email: ClientEmail,
}

impl NewClient {
    #[must_use]
    pub fn new(name: ClientName, email: ClientEmail) -> Self {
        Self { name, email }
    }

    /// Validates raw input into a new client payload.
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(ClientName::new(name)?, ClientEmail::new(email)?))
    }
}
