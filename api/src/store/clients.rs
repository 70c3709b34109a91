use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use payloads::{Client, ClientId, rows::ClientRow};
use reqwest::Method;

use super::{
    ClientsRepository, StoreError, decode_rows, encode_body, eq, first_row,
};
use crate::auth::SessionHandle;
use crate::http::{HttpClient, MERGE_UPSERT};
use crate::pdf::PdfExporter;
use crate::pregnancy;
use crate::time::TimeSource;

const TABLE: &str = "rest/v1/clients";

pub struct SupabaseClientsRepository {
    http: HttpClient,
    session: SessionHandle,
    time_source: TimeSource,
    pdf: Arc<dyn PdfExporter>,
}

impl SupabaseClientsRepository {
    pub fn new(
        http: HttpClient,
        session: SessionHandle,
        time_source: TimeSource,
        pdf: Arc<dyn PdfExporter>,
    ) -> Self {
        Self {
            http,
            session,
            time_source,
            pdf,
        }
    }

    async fn delete_children(
        &self,
        client_id: ClientId,
        access_token: &str,
    ) -> Result<(), StoreError> {
        for table in [
            "rest/v1/birth_plans",
            "rest/v1/recommendations",
            "rest/v1/public_links",
        ] {
            self.http
                .request(
                    Method::DELETE,
                    table,
                    &[("client_id", eq(client_id))],
                    Some(access_token),
                    None,
                    None,
                )
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ClientsRepository for SupabaseClientsRepository {
    #[tracing::instrument(skip(self))]
    async fn fetch_clients(&self) -> Result<Vec<Client>, StoreError> {
        let session = self.session.require()?;
        let body = self
            .http
            .request(
                Method::GET,
                TABLE,
                &[
                    ("select", "*".to_string()),
                    ("doula_id", eq(session.user_id)),
                    ("order", "edd.asc".to_string()),
                ],
                Some(&session.access_token),
                None,
                None,
            )
            .await?;
        let rows: Vec<ClientRow> = decode_rows(&body)?;
        rows.into_iter()
            .map(|row| Client::try_from(row).map_err(StoreError::from))
            .collect()
    }

    #[tracing::instrument(skip(self, client), fields(client_id = %client.id))]
    async fn upsert_client(
        &self,
        mut client: Client,
    ) -> Result<Client, StoreError> {
        let session = self.session.require()?;
        // The stored week is always derived from the due date at save
        // time; a manually adjusted value does not survive a save.
        client.pregnancy_week = pregnancy::week(
            client.estimated_due_date,
            self.time_source.today(),
            pregnancy::DEFAULT_TOTAL_WEEKS,
        );

        let row = ClientRow::from(&client);
        let body = self
            .http
            .request(
                Method::POST,
                TABLE,
                &[("on_conflict", "id".to_string())],
                Some(&session.access_token),
                Some(MERGE_UPSERT),
                Some(&encode_body(&row)?),
            )
            .await?;
        let rows: Vec<ClientRow> = decode_rows(&body)?;
        Ok(Client::try_from(first_row(rows, "saved client")?)?)
    }

    /// Removes the birth plan, recommendation and public links before the
    /// client row itself; owned data is never left behind for the backend
    /// to garbage-collect.
    #[tracing::instrument(skip(self))]
    async fn delete_client(
        &self,
        client_id: ClientId,
    ) -> Result<(), StoreError> {
        let session = self.session.require()?;
        self.delete_children(client_id, &session.access_token).await?;
        self.http
            .request(
                Method::DELETE,
                TABLE,
                &[("id", eq(client_id))],
                Some(&session.access_token),
                None,
                None,
            )
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn export_client_profile(
        &self,
        client_id: ClientId,
    ) -> Result<PathBuf, StoreError> {
        let clients = self.fetch_clients().await?;
        let client = clients
            .into_iter()
            .find(|client| client.id == client_id)
            .ok_or(StoreError::NotFound("client"))?;
        Ok(self.pdf.client_document(&client)?)
    }
}
