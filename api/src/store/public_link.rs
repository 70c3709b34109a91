//! Tokenized public links and the mini-cabinet publish flow.
//!
//! Generating a link is a sequence of dependent network calls with no
//! transaction around them: look up an active link, optionally create
//! one, load the cabinet data, upload the page. Each step is idempotent
//! and traced on its own, so a failure log names exactly how far the
//! flow got; re-invoking the operation repairs a half-finished run.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Span;
use payloads::{
    BirthPlan, Client, ClientId, LinkId, PublicLink, Recommendation,
    rows::PublicLinkRow,
};
use reqwest::Method;

use super::{
    BirthPlanRepository, ClientsRepository, PublicLinkRepository,
    RecommendationsRepository, StoreError, decode_rows, encode_body, eq,
    first_row,
};
use crate::auth::SessionHandle;
use crate::config::SupabaseConfig;
use crate::http::{HttpClient, MERGE_UPSERT};
use crate::storage::StorageClient;
use crate::time::TimeSource;
use crate::token::random_token;

const TABLE: &str = "rest/v1/public_links";

const DEFAULT_LINK_TTL_DAYS: i64 = 30;

pub struct SupabasePublicLinkRepository {
    http: HttpClient,
    storage: StorageClient,
    config: Arc<SupabaseConfig>,
    session: SessionHandle,
    time_source: TimeSource,
    clients: Arc<dyn ClientsRepository>,
    birth_plans: Arc<dyn BirthPlanRepository>,
    recommendations: Arc<dyn RecommendationsRepository>,
}

impl SupabasePublicLinkRepository {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        http: HttpClient,
        storage: StorageClient,
        config: Arc<SupabaseConfig>,
        session: SessionHandle,
        time_source: TimeSource,
        clients: Arc<dyn ClientsRepository>,
        birth_plans: Arc<dyn BirthPlanRepository>,
        recommendations: Arc<dyn RecommendationsRepository>,
    ) -> Self {
        Self {
            http,
            storage,
            config,
            session,
            time_source,
            clients,
            birth_plans,
            recommendations,
        }
    }

    /// Step 1: newest non-disabled link for the client, if any.
    #[tracing::instrument(skip(self, access_token))]
    async fn lookup_active_link(
        &self,
        client_id: ClientId,
        access_token: &str,
    ) -> Result<Option<PublicLinkRow>, StoreError> {
        let body = self
            .http
            .request(
                Method::GET,
                TABLE,
                &[
                    ("select", "*".to_string()),
                    ("client_id", eq(client_id)),
                    ("disabled", "is.false".to_string()),
                    ("order", "created_at.desc".to_string()),
                    ("limit", "1".to_string()),
                ],
                Some(access_token),
                None,
                None,
            )
            .await?;
        let rows: Vec<PublicLinkRow> = decode_rows(&body)?;
        Ok(rows.into_iter().next())
    }

    /// Step 2: mint a fresh token and insert the link row with the default
    /// expiry.
    #[tracing::instrument(skip(self, access_token))]
    async fn create_link(
        &self,
        client_id: ClientId,
        access_token: &str,
    ) -> Result<PublicLinkRow, StoreError> {
        let now = self.time_source.now();
        let row = PublicLinkRow {
            id: LinkId::new(),
            client_id,
            token: random_token(),
            created_at: now,
            expires_at: now
                .checked_add(Span::new().hours(24 * DEFAULT_LINK_TTL_DAYS))
                .ok(),
            disabled: false,
        };
        let body = self
            .http
            .request(
                Method::POST,
                TABLE,
                &[("on_conflict", "id".to_string())],
                Some(access_token),
                Some(MERGE_UPSERT),
                Some(&encode_body(&row)?),
            )
            .await?;
        let rows: Vec<PublicLinkRow> = decode_rows(&body)?;
        first_row(rows, "created link")
    }

    /// Step 3: everything the page needs. The client must still exist; a
    /// missing plan or recommendation just renders its placeholder.
    #[tracing::instrument(skip(self))]
    async fn load_cabinet(
        &self,
        client_id: ClientId,
    ) -> Result<(Client, Option<BirthPlan>, Option<Recommendation>), StoreError>
    {
        let clients = self.clients.fetch_clients().await?;
        let client = clients
            .into_iter()
            .find(|client| client.id == client_id)
            .ok_or(StoreError::NotFound("client"))?;
        let plan = self.birth_plans.fetch_birth_plan(client_id).await.ok();
        let recommendation = self
            .recommendations
            .fetch_recommendation(client_id)
            .await
            .ok();
        Ok((client, plan, recommendation))
    }

    /// Step 4: overwrite the page at the token's storage path.
    #[tracing::instrument(skip_all, fields(token = %token))]
    async fn publish_page(
        &self,
        token: &str,
        client: &Client,
        plan: Option<&BirthPlan>,
        recommendation: Option<&Recommendation>,
        access_token: &str,
    ) -> Result<(), StoreError> {
        let html = prerender::cabinet::build(client, plan, recommendation);
        let path = format!(
            "{}/{token}/index.html",
            self.config.client_cabinets_prefix
        );
        self.storage
            .put_object(
                &self.config.public_cabinets_bucket,
                &path,
                html.into_bytes(),
                "text/html; charset=utf-8",
                access_token,
                true,
            )
            .await
    }
}

#[async_trait]
impl PublicLinkRepository for SupabasePublicLinkRepository {
    #[tracing::instrument(skip(self))]
    async fn generate_link(
        &self,
        client_id: ClientId,
    ) -> Result<PublicLink, StoreError> {
        let session = self.session.require()?;

        let link = match self
            .lookup_active_link(client_id, &session.access_token)
            .await?
        {
            Some(existing) => existing,
            None => {
                self.create_link(client_id, &session.access_token).await?
            }
        };

        let (client, plan, recommendation) =
            self.load_cabinet(client_id).await?;
        self.publish_page(
            &link.token,
            &client,
            plan.as_ref(),
            recommendation.as_ref(),
            &session.access_token,
        )
        .await?;

        Ok(link.into())
    }

    #[tracing::instrument(skip(self))]
    async fn revoke_link(&self, link_id: LinkId) -> Result<(), StoreError> {
        let session = self.session.require()?;
        self.http
            .request(
                Method::PATCH,
                TABLE,
                &[("id", eq(link_id))],
                Some(&session.access_token),
                Some("return=representation"),
                Some(&serde_json::json!({ "disabled": true })),
            )
            .await?;
        Ok(())
    }
}
