use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        client::{Client, NewClient},
        types::ClientId,
    },
    models::client::{Client as DbClient, NewClient as DbNewClient},
    repository::{
        ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_client = clients::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        db_client
            .map(|client| Client::try_from(client).map_err(RepositoryError::from))
            .transpose()
    }

    fn client_exists(&self, id: ClientId) -> RepositoryResult<bool> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(clients::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let db_client = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(db_client).map_err(RepositoryError::from)
    }
}
