//! Repositories over the remote data store and object storage.
//!
//! ## Design Decisions
//!
//! ### One active link per client
//! - "Generate" reuses the newest non-disabled link for a client instead
//!   of rotating tokens on every publish, so a shared URL keeps working
//!   across republishes. Revoking only flips the `disabled` flag; the
//!   already-published page can stay reachable until the storage layer's
//!   access control catches up. Callers must treat previously shared URLs
//!   as potentially cached.
//!
//! ### Non-atomic publish
//! - Publishing a mini-cabinet is several dependent network calls. Each
//!   step is its own idempotent, individually-traced function; a crash
//!   mid-sequence can leave a link row without a published page, or a
//!   stale page. Nothing retries automatically. Re-invoking the whole
//!   operation repairs either state.
//!
//! ### Derived pregnancy week
//! - Every client save recomputes the week from the due date and the
//!   injected [`TimeSource`](crate::time::TimeSource), overwriting
//!   whatever the row carried.
//!
//! ### Explicit cascade
//! - Deleting a client issues the child deletes itself (birth plan,
//!   recommendation, public links) before removing the client row, rather
//!   than assuming backend-side cascade rules.

use std::path::PathBuf;

use async_trait::async_trait;
use payloads::{
    AttachmentId, BirthPlan, Client, ClientId, DoulaProfile, LinkId,
    PublicLink, Recommendation, RecommendationAttachment,
};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::credential::CredentialError;
use crate::pdf::PdfError;

mod birth_plan;
mod clients;
mod profile;
mod public_link;
mod recommendation;

pub use birth_plan::SupabaseBirthPlanRepository;
pub use clients::SupabaseClientsRepository;
pub use profile::SupabaseProfileRepository;
pub use public_link::SupabasePublicLinkRepository;
pub use recommendation::SupabaseRecommendationsRepository;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A session-scoped operation was attempted with no active session.
    #[error("not authenticated")]
    AuthRequired,
    /// Non-2xx response from the data store or object storage; carries the
    /// status and the raw body text.
    #[error("backend error {0}: {1}")]
    Api(StatusCode, String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body did not match the expected row shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[source] serde_json::Error),
    /// Decode-class failure: an enumerated column carried a value this
    /// build does not know.
    #[error(transparent)]
    UnknownStatus(#[from] payloads::UnknownStatus),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Local encoding of a request payload failed. Fatal to the operation,
    /// never to the process.
    #[error("encoding failure: {0}")]
    Encoding(#[source] serde_json::Error),
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error(transparent)]
    Pdf(#[from] PdfError),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The saved profile, or an empty draft keyed to the authenticated
    /// account when none has been saved yet.
    async fn fetch_profile(&self) -> Result<DoulaProfile, StoreError>;

    async fn save_profile(
        &self,
        profile: &DoulaProfile,
    ) -> Result<DoulaProfile, StoreError>;

    async fn export_profile_pdf(
        &self,
        profile: &DoulaProfile,
    ) -> Result<PathBuf, StoreError>;

    /// Publish the public profile page and return its URL. The page token
    /// is kept in the credential store and reused across publishes.
    async fn generate_public_profile_link(
        &self,
        profile: &DoulaProfile,
    ) -> Result<String, StoreError>;
}

#[async_trait]
pub trait ClientsRepository: Send + Sync {
    /// All clients of the authenticated doula, due date ascending.
    async fn fetch_clients(&self) -> Result<Vec<Client>, StoreError>;

    /// Insert or update a client. The pregnancy week is recomputed from
    /// the due date before the row is written.
    async fn upsert_client(
        &self,
        client: Client,
    ) -> Result<Client, StoreError>;

    /// Delete a client and everything it owns.
    async fn delete_client(
        &self,
        client_id: ClientId,
    ) -> Result<(), StoreError>;

    async fn export_client_profile(
        &self,
        client_id: ClientId,
    ) -> Result<PathBuf, StoreError>;
}

#[async_trait]
pub trait BirthPlanRepository: Send + Sync {
    /// The client's plan, or an empty one when none has been saved yet.
    async fn fetch_birth_plan(
        &self,
        client_id: ClientId,
    ) -> Result<BirthPlan, StoreError>;

    /// Upsert the whole plan document; sections are never persisted
    /// individually.
    async fn save_birth_plan(
        &self,
        plan: &BirthPlan,
    ) -> Result<BirthPlan, StoreError>;

    async fn export_birth_plan_pdf(
        &self,
        plan: &BirthPlan,
    ) -> Result<PathBuf, StoreError>;
}

#[async_trait]
pub trait RecommendationsRepository: Send + Sync {
    /// The client's recommendation, or a default draft when none has been
    /// saved yet.
    async fn fetch_recommendation(
        &self,
        client_id: ClientId,
    ) -> Result<Recommendation, StoreError>;

    async fn save_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<Recommendation, StoreError>;

    /// Upload attachment bytes and return the stored file reference.
    async fn upload_attachment(
        &self,
        client_id: ClientId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<RecommendationAttachment, StoreError>;

    /// Row-side removal only; the stored object is left in place.
    async fn delete_attachment(
        &self,
        client_id: ClientId,
        attachment_id: AttachmentId,
    ) -> Result<(), StoreError>;
}

#[async_trait]
pub trait PublicLinkRepository: Send + Sync {
    /// Reuse the client's newest active link or mint a new one, then
    /// (re)publish the mini-cabinet page at the token's storage path.
    async fn generate_link(
        &self,
        client_id: ClientId,
    ) -> Result<PublicLink, StoreError>;

    /// Mark the link disabled. Does not delete the published page.
    async fn revoke_link(&self, link_id: LinkId) -> Result<(), StoreError>;
}

/// Decode a PostgREST response body into its rows.
pub(crate) fn decode_rows<T: DeserializeOwned>(
    body: &str,
) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(body).map_err(StoreError::Decode)
}

pub(crate) fn first_row<T>(
    rows: Vec<T>,
    what: &'static str,
) -> Result<T, StoreError> {
    rows.into_iter().next().ok_or(StoreError::NotFound(what))
}

pub(crate) fn encode_body<T: Serialize>(
    row: &T,
) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(row).map_err(StoreError::Encoding)
}

/// PostgREST equality filter value.
pub(crate) fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}
