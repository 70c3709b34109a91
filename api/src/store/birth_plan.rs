use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use payloads::{BirthPlan, ClientId, rows::BirthPlanRow};
use reqwest::Method;

use super::{
    BirthPlanRepository, StoreError, decode_rows, encode_body, eq, first_row,
};
use crate::auth::SessionHandle;
use crate::http::{HttpClient, MERGE_UPSERT};
use crate::pdf::PdfExporter;
use crate::time::TimeSource;

const TABLE: &str = "rest/v1/birth_plans";

pub struct SupabaseBirthPlanRepository {
    http: HttpClient,
    session: SessionHandle,
    time_source: TimeSource,
    pdf: Arc<dyn PdfExporter>,
}

impl SupabaseBirthPlanRepository {
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
}

#[async_trait]
impl BirthPlanRepository for SupabaseBirthPlanRepository {
    #[tracing::instrument(skip(self))]
    async fn fetch_birth_plan(
        &self,
        client_id: ClientId,
    ) -> Result<BirthPlan, StoreError> {
        let session = self.session.require()?;
        let body = self
            .http
            .request(
                Method::GET,
                TABLE,
                &[
                    ("select", "*".to_string()),
                    ("client_id", eq(client_id)),
                ],
                Some(&session.access_token),
                None,
                None,
            )
            .await?;
        let rows: Vec<BirthPlanRow> = decode_rows(&body)?;
        Ok(rows
            .into_iter()
            .next()
            .map(BirthPlan::from)
            .unwrap_or_else(|| {
                BirthPlan::empty(client_id, self.time_source.now())
            }))
    }

    #[tracing::instrument(skip(self, plan), fields(client_id = %plan.client_id))]
    async fn save_birth_plan(
        &self,
        plan: &BirthPlan,
    ) -> Result<BirthPlan, StoreError> {
        let session = self.session.require()?;
        let row = BirthPlanRow::from(plan);
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
        let rows: Vec<BirthPlanRow> = decode_rows(&body)?;
        first_row(rows, "saved birth plan").map(BirthPlan::from)
    }

    async fn export_birth_plan_pdf(
        &self,
        plan: &BirthPlan,
    ) -> Result<PathBuf, StoreError> {
        Ok(self.pdf.birth_plan_document(plan)?)
    }
}
