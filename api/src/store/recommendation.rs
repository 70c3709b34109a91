use std::sync::Arc;

use async_trait::async_trait;
use payloads::{
    AttachmentId, AttachmentKind, ClientId, Recommendation,
    RecommendationAttachment, rows::RecommendationRow,
};
use reqwest::Method;

use super::{
    RecommendationsRepository, StoreError, decode_rows, encode_body, eq,
    first_row,
};
use crate::auth::SessionHandle;
use crate::config::SupabaseConfig;
use crate::http::{HttpClient, MERGE_UPSERT};
use crate::storage::StorageClient;
use crate::time::TimeSource;

const TABLE: &str = "rest/v1/recommendations";

pub struct SupabaseRecommendationsRepository {
    http: HttpClient,
    storage: StorageClient,
    config: Arc<SupabaseConfig>,
    session: SessionHandle,
    time_source: TimeSource,
}

impl SupabaseRecommendationsRepository {
    pub fn new(
        http: HttpClient,
        storage: StorageClient,
        config: Arc<SupabaseConfig>,
        session: SessionHandle,
        time_source: TimeSource,
    ) -> Self {
        Self {
            http,
            storage,
            config,
            session,
            time_source,
        }
    }
}

#[async_trait]
impl RecommendationsRepository for SupabaseRecommendationsRepository {
    #[tracing::instrument(skip(self))]
    async fn fetch_recommendation(
        &self,
        client_id: ClientId,
    ) -> Result<Recommendation, StoreError> {
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
        let rows: Vec<RecommendationRow> = decode_rows(&body)?;
        Ok(rows
            .into_iter()
            .next()
            .map(Recommendation::from)
            .unwrap_or_else(|| {
                Recommendation::draft(client_id, self.time_source.now())
            }))
    }

    #[tracing::instrument(
        skip(self, recommendation),
        fields(client_id = %recommendation.client_id)
    )]
    async fn save_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<Recommendation, StoreError> {
        let session = self.session.require()?;
        let row = RecommendationRow::from(recommendation);
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
        let rows: Vec<RecommendationRow> = decode_rows(&body)?;
        first_row(rows, "saved recommendation").map(Recommendation::from)
    }

    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload_attachment(
        &self,
        client_id: ClientId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<RecommendationAttachment, StoreError> {
        let session = self.session.require()?;
        let file_name = if file_name.is_empty() {
            "attachment"
        } else {
            file_name
        };
        let attachment_id = AttachmentId::new();
        let path = format!("clients/{client_id}/{attachment_id}-{file_name}");
        self.storage
            .put_object(
                &self.config.attachments_bucket,
                &path,
                bytes,
                mime_type(file_name),
                &session.access_token,
                true,
            )
            .await?;
        Ok(RecommendationAttachment {
            id: attachment_id,
            file_name: file_name.to_string(),
            url: self
                .config
                .public_object_url(&self.config.attachments_bucket, &path),
            kind: AttachmentKind::from_file_name(file_name),
        })
    }

    async fn delete_attachment(
        &self,
        _client_id: ClientId,
        _attachment_id: AttachmentId,
    ) -> Result<(), StoreError> {
        // Storage-side delete is not implemented; the caller removes the
        // attachment from the recommendation payload and saves it.
        Ok(())
    }
}

fn mime_type(file_name: &str) -> &'static str {
    let extension = std::path::Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("heic") => "image/heic",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_follow_the_extension() {
        assert_eq!(mime_type("bag.pdf"), "application/pdf");
        assert_eq!(mime_type("photo.JPG"), "image/jpeg");
        assert_eq!(mime_type("notes"), "application/octet-stream");
    }
}
