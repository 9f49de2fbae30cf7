//! Clients Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::clients::{
    data::NormalizedClient,
    records::{ClientRecord, ClientUuid},
};

const CREATE_CLIENT_SQL: &str = include_str!("sql/create_client.sql");
const LIST_CLIENTS_SQL: &str = include_str!("sql/list_clients.sql");
const GET_CLIENT_SQL: &str = include_str!("sql/get_client.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgClientsRepository;

impl PgClientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: NormalizedClient,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(CREATE_CLIENT_SQL)
            .bind(client.uuid.into_uuid())
            .bind(client.name)
            .bind(client.surname)
            .bind(client.national_id)
            .bind(client.phone)
            .bind(client.email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(LIST_CLIENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientUuid,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(GET_CLIENT_SQL)
            .bind(client.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ClientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ClientUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            surname: row.try_get("surname")?,
            national_id: row.try_get("national_id")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
