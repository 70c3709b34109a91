//! Object storage client. Upload-only; the public URL for a stored object
//! is a pure mapping on [`SupabaseConfig`].

use std::sync::Arc;

use reqwest::header;
use secrecy::ExposeSecret;

use crate::config::SupabaseConfig;
use crate::store::StoreError;

#[derive(Clone)]
pub struct StorageClient {
    pub config: Arc<SupabaseConfig>,
    pub inner_client: reqwest::Client,
}

impl StorageClient {
    pub fn new(config: Arc<SupabaseConfig>) -> Self {
        Self {
            config,
            inner_client: reqwest::Client::new(),
        }
    }

    /// Upload raw bytes to `bucket/path`. With `upsert` the write replaces
    /// whatever is already stored there.
    #[tracing::instrument(
        skip(self, bytes, access_token),
        fields(size = bytes.len())
    )]
    pub async fn put_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        access_token: &str,
        upsert: bool,
    ) -> Result<(), StoreError> {
        let url = format!(
            "{}/storage/v1/object/{bucket}/{path}",
            self.config.url.trim_end_matches('/')
        );
        let response = self
            .inner_client
            .post(url)
            .header("apikey", self.config.anon_key.expose_secret())
            .bearer_auth(access_token)
            .header(header::CONTENT_TYPE, content_type.to_string())
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Api(status, response.text().await?));
        }
        Ok(())
    }
}
