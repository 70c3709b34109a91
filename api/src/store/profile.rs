use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use payloads::{DoulaProfile, rows::DoulaProfileRow};
use reqwest::Method;

use super::{
    ProfileRepository, StoreError, decode_rows, encode_body, eq, first_row,
};
use crate::auth::SessionHandle;
use crate::config::SupabaseConfig;
use crate::credential::{
    CREDENTIAL_SERVICE, CredentialStore, PROFILE_TOKEN_ACCOUNT,
};
use crate::http::{HttpClient, MERGE_UPSERT};
use crate::pdf::PdfExporter;
use crate::storage::StorageClient;
use crate::token::random_token;

const TABLE: &str = "rest/v1/doula_profile";

pub struct SupabaseProfileRepository {
    http: HttpClient,
    storage: StorageClient,
    config: Arc<SupabaseConfig>,
    session: SessionHandle,
    credentials: Arc<dyn CredentialStore>,
    pdf: Arc<dyn PdfExporter>,
}

impl SupabaseProfileRepository {
    pub fn new(
        http: HttpClient,
        storage: StorageClient,
        config: Arc<SupabaseConfig>,
        session: SessionHandle,
        credentials: Arc<dyn CredentialStore>,
        pdf: Arc<dyn PdfExporter>,
    ) -> Self {
        Self {
            http,
            storage,
            config,
            session,
            credentials,
            pdf,
        }
    }

    /// The profile page token lives in the credential store so the public
    /// URL stays stable across republishes and reinstalls that keep the
    /// keychain.
    fn load_or_create_profile_token(&self) -> Result<String, StoreError> {
        if let Some(blob) =
            self.credentials.get(CREDENTIAL_SERVICE, PROFILE_TOKEN_ACCOUNT)?
        {
            if let Some(token) =
                String::from_utf8(blob).ok().filter(|t| !t.is_empty())
            {
                return Ok(token);
            }
        }
        let token = random_token();
        self.credentials.set(
            CREDENTIAL_SERVICE,
            PROFILE_TOKEN_ACCOUNT,
            token.as_bytes(),
        )?;
        Ok(token)
    }
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    #[tracing::instrument(skip(self))]
    async fn fetch_profile(&self) -> Result<DoulaProfile, StoreError> {
        let session = self.session.require()?;
        let body = self
            .http
            .request(
                Method::GET,
                TABLE,
                &[
                    ("select", "*".to_string()),
                    ("id", eq(session.user_id)),
                ],
                Some(&session.access_token),
                None,
                None,
            )
            .await?;
        let rows: Vec<DoulaProfileRow> = decode_rows(&body)?;
        Ok(rows
            .into_iter()
            .next()
            .map(DoulaProfile::from)
            .unwrap_or_else(|| DoulaProfile::empty_draft(session.user_id)))
    }

    #[tracing::instrument(skip(self, profile))]
    async fn save_profile(
        &self,
        profile: &DoulaProfile,
    ) -> Result<DoulaProfile, StoreError> {
        let session = self.session.require()?;
        let row = DoulaProfileRow::from_profile(profile, session.user_id);
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
        let rows: Vec<DoulaProfileRow> = decode_rows(&body)?;
        first_row(rows, "saved profile").map(DoulaProfile::from)
    }

    async fn export_profile_pdf(
        &self,
        profile: &DoulaProfile,
    ) -> Result<PathBuf, StoreError> {
        Ok(self.pdf.profile_document(profile)?)
    }

    #[tracing::instrument(skip(self, profile))]
    async fn generate_public_profile_link(
        &self,
        profile: &DoulaProfile,
    ) -> Result<String, StoreError> {
        let session = self.session.require()?;
        let token = self.load_or_create_profile_token()?;
        let html = prerender::profile::build(profile);
        let path = format!(
            "{}/{token}/index.html",
            self.config.public_profiles_prefix
        );
        self.storage
            .put_object(
                &self.config.public_profiles_bucket,
                &path,
                html.into_bytes(),
                "text/html; charset=utf-8",
                &session.access_token,
                true,
            )
            .await?;
        Ok(self
            .config
            .public_object_url(&self.config.public_profiles_bucket, &path))
    }
}
