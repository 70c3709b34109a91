//! PDF export boundary.
//!
//! The page-flowing document writer depends on a platform graphics
//! surface, so it stays behind a trait; repositories only route entity
//! data to an injected implementation and hand back the written file.

use std::path::PathBuf;

use payloads::{BirthPlan, Client, DoulaProfile};

#[derive(Debug, thiserror::Error)]
#[error("pdf export failed: {0}")]
pub struct PdfError(pub String);

pub trait PdfExporter: Send + Sync {
    fn profile_document(
        &self,
        profile: &DoulaProfile,
    ) -> Result<PathBuf, PdfError>;

    fn client_document(&self, client: &Client) -> Result<PathBuf, PdfError>;

    fn birth_plan_document(
        &self,
        plan: &BirthPlan,
    ) -> Result<PathBuf, PdfError>;
}
