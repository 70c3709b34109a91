//! Shared domain types for the BirthPrep client core.
//!
//! Entities mirror what the UI works with; the wire shapes the backend
//! tables use live in [`rows`]. Sections and attachments are embedded
//! documents, so their serde derives double as the wire format.

use derive_more::Display;
use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod rows;
pub mod templates;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct DoulaId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ClientId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct BirthPlanId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct SectionId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct RecommendationId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct AttachmentId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct LinkId(pub Uuid);

macro_rules! impl_random_id {
    ($($id:ident),*) => {
        $(
            #[allow(clippy::new_without_default)]
            impl $id {
                pub fn new() -> Self {
                    Self(Uuid::new_v4())
                }
            }
        )*
    };
}

impl_random_id!(
    DoulaId,
    ClientId,
    BirthPlanId,
    SectionId,
    RecommendationId,
    AttachmentId,
    LinkId
);

/// A doula's own profile. One per account; overwritten on save, never
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoulaProfile {
    pub id: DoulaId,
    pub full_name: String,
    pub professional_title: String,
    pub experience_summary: String,
    /// Markdown; rendered through `markdown-html` on public pages.
    pub bio: String,
    pub photo_url: Option<String>,
    pub contact_email: String,
    pub phone_number: String,
    pub website: Option<String>,
    pub certifications: Vec<String>,
}

impl DoulaProfile {
    /// Blank profile for an account that has not saved one yet.
    pub fn empty_draft(id: DoulaId) -> Self {
        Self {
            id,
            full_name: String::new(),
            professional_title: String::new(),
            experience_summary: String::new(),
            bio: String::new(),
            photo_url: None,
            contact_email: String::new(),
            phone_number: String::new(),
            website: None,
            certifications: Vec::new(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Onboarding,
    Preparing,
    Approaching,
    Postpartum,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 4] = [
        ClientStatus::Onboarding,
        ClientStatus::Preparing,
        ClientStatus::Approaching,
        ClientStatus::Postpartum,
    ];

    /// Wire value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Onboarding => "onboarding",
            ClientStatus::Preparing => "preparing",
            ClientStatus::Approaching => "approaching",
            ClientStatus::Postpartum => "postpartum",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClientStatus::Onboarding => "Onboarding",
            ClientStatus::Preparing => "Preparing",
            ClientStatus::Approaching => "Approaching",
            ClientStatus::Postpartum => "Postpartum",
        }
    }
}

/// An unrecognized `status` value coming back from the data store. Treated
/// as a decode failure by the repositories, never a panic.
#[derive(Debug, thiserror::Error)]
#[error("unknown client status: {0}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for ClientStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A client under a doula's care. Owns a birth plan, a recommendation and
/// any public links; deleting the client removes all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub doula_id: DoulaId,
    pub name: String,
    pub contact_details: String,
    pub estimated_due_date: Date,
    /// Derived from the due date on every save; any stored value is
    /// overwritten at that point.
    pub pregnancy_week: i32,
    pub status: ClientStatus,
    pub notes: String,
    pub medical_notes: Option<String>,
}

/// One titled Markdown block of a birth plan. Embedded in the plan row as
/// JSON; a missing id in stored content gets a fresh one on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthPlanSection {
    #[serde(default = "SectionId::new")]
    pub id: SectionId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthPlan {
    pub id: BirthPlanId,
    pub client_id: ClientId,
    pub sections: Vec<BirthPlanSection>,
    pub updated_at: Timestamp,
}

impl BirthPlan {
    /// Empty plan for a client that has not saved one yet.
    pub fn empty(client_id: ClientId, now: Timestamp) -> Self {
        Self {
            id: BirthPlanId::new(),
            client_id,
            sections: Vec::new(),
            updated_at: now,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Pdf,
    Image,
    Docx,
    Other,
}

impl AttachmentKind {
    /// Coarse type inferred from the filename extension.
    pub fn from_file_name(file_name: &str) -> Self {
        match extension(file_name).as_deref() {
            Some("pdf") => AttachmentKind::Pdf,
            Some("png" | "jpg" | "jpeg" | "heic" | "gif" | "webp") => {
                AttachmentKind::Image
            }
            Some("docx") => AttachmentKind::Docx,
            _ => AttachmentKind::Other,
        }
    }
}

fn extension(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// A file attached to a recommendation. Field names follow the embedded
/// JSON the backend stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationAttachment {
    #[serde(default = "AttachmentId::new")]
    pub id: AttachmentId,
    pub file_name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub client_id: ClientId,
    pub title: String,
    /// Markdown; rendered through `markdown-html` on the mini-cabinet page.
    pub content: String,
    pub attachments: Vec<RecommendationAttachment>,
    pub updated_at: Timestamp,
}

impl Recommendation {
    /// Default draft for a client that has not saved one yet.
    pub fn draft(client_id: ClientId, now: Timestamp) -> Self {
        Self {
            id: RecommendationId::new(),
            client_id,
            title: "New Recommendation".to_string(),
            content: String::new(),
            attachments: Vec::new(),
            updated_at: now,
        }
    }
}

/// A tokenized public link to a client's mini-cabinet page. The token is
/// the sole access credential for the published page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicLink {
    pub id: LinkId,
    pub client_id: ClientId,
    pub token: String,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
    pub disabled: bool,
}

impl PublicLink {
    /// Public URL of the published page under `base_url`, which must point
    /// at the directory containing token folders. None for an empty token.
    pub fn share_url(&self, base_url: &str) -> Option<String> {
        if self.token.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}/index.html",
            base_url.trim_end_matches('/'),
            self.token
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_values() {
        for status in ClientStatus::ALL {
            assert_eq!(status.as_str().parse::<ClientStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_an_error() {
        let err = "archived".parse::<ClientStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown client status: archived");
    }

    #[test]
    fn attachment_kind_from_extension() {
        assert_eq!(
            AttachmentKind::from_file_name("HospitalBag.pdf"),
            AttachmentKind::Pdf
        );
        assert_eq!(
            AttachmentKind::from_file_name("belly.JPEG"),
            AttachmentKind::Image
        );
        assert_eq!(
            AttachmentKind::from_file_name("plan.docx"),
            AttachmentKind::Docx
        );
        assert_eq!(
            AttachmentKind::from_file_name("notes"),
            AttachmentKind::Other
        );
    }

    #[test]
    fn share_url_joins_base_and_token() {
        let link = PublicLink {
            id: LinkId::new(),
            client_id: ClientId::new(),
            token: "abc123".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            expires_at: None,
            disabled: false,
        };
        assert_eq!(
            link.share_url("https://example.supabase.co/storage/v1/object/public/public_cabinets/c/"),
            Some(
                "https://example.supabase.co/storage/v1/object/public/public_cabinets/c/abc123/index.html"
                    .to_string()
            )
        );

        let empty = PublicLink {
            token: String::new(),
            ..link
        };
        assert_eq!(empty.share_url("https://example.com/c"), None);
    }

    #[test]
    fn attachment_decodes_wire_field_names() {
        let attachment: RecommendationAttachment = serde_json::from_str(
            r#"{"fileName":"HospitalBag.pdf","url":"https://example.com/HospitalBag.pdf","type":"pdf"}"#,
        )
        .unwrap();
        assert_eq!(attachment.file_name, "HospitalBag.pdf");
        assert_eq!(attachment.kind, AttachmentKind::Pdf);
    }
}
