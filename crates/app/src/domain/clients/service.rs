//! Clients service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::clients::{
        data::NewClient,
        errors::ClientsServiceError,
        records::{ClientRecord, ClientUuid},
        repository::PgClientsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgClientsService {
    db: Db,
    repository: PgClientsRepository,
}

impl PgClientsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgClientsRepository::new(),
        }
    }
}

#[async_trait]
impl ClientsService for PgClientsService {
    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError> {
        let client = client.normalized();

        if client.name.is_empty() {
            return Err(ClientsServiceError::MissingName);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_client(&mut tx, client).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let clients = self.repository.list_clients(&mut tx).await?;

        tx.commit().await?;

        Ok(clients)
    }

    async fn get_client(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let client = self.repository.get_client(&mut tx, client).await?;

        tx.commit().await?;

        Ok(client)
    }
}

#[automock]
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// Register a new client.
    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError>;

    /// Retrieve all clients ordered by name.
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError>;

    /// Retrieve a single client.
    async fn get_client(&self, client: ClientUuid) -> Result<ClientRecord, ClientsServiceError>;
}
