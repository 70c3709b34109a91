//! Request plumbing for the backend's row-oriented REST interface.

use std::sync::Arc;

use reqwest::{Method, header};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::SupabaseConfig;
use crate::store::StoreError;

/// Upsert preference: insert-or-update on the conflict key and return the
/// resulting row.
pub const MERGE_UPSERT: &str =
    "resolution=merge-duplicates,return=representation";

#[derive(Clone)]
pub struct HttpClient {
    pub config: Arc<SupabaseConfig>,
    pub inner_client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: Arc<SupabaseConfig>) -> Self {
        Self {
            config,
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }

    /// Issue one request and hand back the body text of a 2xx response.
    /// A non-2xx response becomes [`StoreError::Api`] with the status and
    /// raw body preserved for the caller's error message.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        access_token: Option<&str>,
        prefer: Option<&str>,
        body: Option<&Value>,
    ) -> Result<String, StoreError> {
        let mut request = self
            .inner_client
            .request(method, self.format_url(path))
            .header("apikey", self.config.anon_key.expose_secret())
            .header(header::ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        if let Some(prefer) = prefer {
            request = request.header("Prefer", prefer);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Api(status, text));
        }
        Ok(text)
    }
}
