//! Wire rows for the backend tables.
//!
//! These are the snake_case shapes PostgREST sends and accepts; the
//! repositories decode a `Vec` of rows from every response and convert to
//! the entity types. Conversions out of a row are fallible only where an
//! enumerated column can carry a value this build does not know.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use crate::{
    BirthPlan, BirthPlanId, BirthPlanSection, Client, ClientId, ClientStatus,
    DoulaId, DoulaProfile, LinkId, PublicLink, Recommendation,
    RecommendationAttachment, RecommendationId, UnknownStatus,
};

/// `doula_profile` table. Keyed by the account id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoulaProfileRow {
    pub id: DoulaId,
    pub name: String,
    pub title: String,
    pub experience: String,
    pub bio: String,
    pub photo_url: Option<String>,
    pub contact_email: String,
    pub phone: String,
    pub website: Option<String>,
    pub certifications: Vec<String>,
}

impl DoulaProfileRow {
    /// Row for an upsert. The row id is always the authenticated account
    /// id, regardless of what the in-memory profile carries.
    pub fn from_profile(profile: &DoulaProfile, account_id: DoulaId) -> Self {
        Self {
            id: account_id,
            name: profile.full_name.clone(),
            title: profile.professional_title.clone(),
            experience: profile.experience_summary.clone(),
            bio: profile.bio.clone(),
            photo_url: profile.photo_url.clone(),
            contact_email: profile.contact_email.clone(),
            phone: profile.phone_number.clone(),
            website: profile.website.clone(),
            certifications: profile.certifications.clone(),
        }
    }
}

impl From<DoulaProfileRow> for DoulaProfile {
    fn from(row: DoulaProfileRow) -> Self {
        Self {
            id: row.id,
            full_name: row.name,
            professional_title: row.title,
            experience_summary: row.experience,
            bio: row.bio,
            photo_url: row.photo_url,
            contact_email: row.contact_email,
            phone_number: row.phone,
            website: row.website,
            certifications: row.certifications,
        }
    }
}

/// `clients` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRow {
    pub id: ClientId,
    pub doula_id: DoulaId,
    pub name: String,
    pub contact: String,
    pub edd: Date,
    pub pregnancy_week: i32,
    pub status: String,
    pub notes: String,
    pub medical_notes: Option<String>,
}

impl From<&Client> for ClientRow {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            doula_id: client.doula_id,
            name: client.name.clone(),
            contact: client.contact_details.clone(),
            edd: client.estimated_due_date,
            pregnancy_week: client.pregnancy_week,
            status: client.status.as_str().to_string(),
            notes: client.notes.clone(),
            medical_notes: client.medical_notes.clone(),
        }
    }
}

impl TryFrom<ClientRow> for Client {
    type Error = UnknownStatus;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            doula_id: row.doula_id,
            name: row.name,
            contact_details: row.contact,
            estimated_due_date: row.edd,
            pregnancy_week: row.pregnancy_week,
            status: row.status.parse::<ClientStatus>()?,
            notes: row.notes,
            medical_notes: row.medical_notes,
        })
    }
}

/// `birth_plans` table. Sections are stored whole in the `content` JSON
/// column; there is no section-level persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthPlanRow {
    pub id: BirthPlanId,
    pub client_id: ClientId,
    pub content: Vec<BirthPlanSection>,
    pub updated_at: Timestamp,
    pub pdf_url: Option<String>,
}

impl From<&BirthPlan> for BirthPlanRow {
    fn from(plan: &BirthPlan) -> Self {
        Self {
            id: plan.id,
            client_id: plan.client_id,
            content: plan.sections.clone(),
            updated_at: plan.updated_at,
            pdf_url: None,
        }
    }
}

impl From<BirthPlanRow> for BirthPlan {
    fn from(row: BirthPlanRow) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            sections: row.content,
            updated_at: row.updated_at,
        }
    }
}

/// `recommendations` table. Attachments are embedded JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRow {
    pub id: RecommendationId,
    pub client_id: ClientId,
    pub title: String,
    pub content: String,
    pub attachments: Vec<RecommendationAttachment>,
    pub updated_at: Timestamp,
}

impl From<&Recommendation> for RecommendationRow {
    fn from(rec: &Recommendation) -> Self {
        Self {
            id: rec.id,
            client_id: rec.client_id,
            title: rec.title.clone(),
            content: rec.content.clone(),
            attachments: rec.attachments.clone(),
            updated_at: rec.updated_at,
        }
    }
}

impl From<RecommendationRow> for Recommendation {
    fn from(row: RecommendationRow) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            title: row.title,
            content: row.content,
            attachments: row.attachments,
            updated_at: row.updated_at,
        }
    }
}

/// `public_links` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicLinkRow {
    pub id: LinkId,
    pub client_id: ClientId,
    pub token: String,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
    pub disabled: bool,
}

impl From<&PublicLink> for PublicLinkRow {
    fn from(link: &PublicLink) -> Self {
        Self {
            id: link.id,
            client_id: link.client_id,
            token: link.token.clone(),
            created_at: link.created_at,
            expires_at: link.expires_at,
            disabled: link.disabled,
        }
    }
}

impl From<PublicLinkRow> for PublicLink {
    fn from(row: PublicLinkRow) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            token: row.token,
            created_at: row.created_at,
            expires_at: row.expires_at,
            disabled: row.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_row_decodes_and_maps() {
        let row: ClientRow = serde_json::from_str(
            r#"{
                "id": "6f7f4a3e-98d2-4a0b-bb0b-0a8a6a0f1b11",
                "doula_id": "0e9a9c3a-0f7d-4a6b-8df1-2c2b9f6f2a22",
                "name": "Harper Lee",
                "contact": "harper@example.com",
                "edd": "2026-09-19",
                "pregnancy_week": 32,
                "status": "preparing",
                "notes": "Prefers water birth.",
                "medical_notes": null
            }"#,
        )
        .unwrap();

        let client = Client::try_from(row).unwrap();
        assert_eq!(client.name, "Harper Lee");
        assert_eq!(client.status, ClientStatus::Preparing);
        assert_eq!(client.estimated_due_date.year(), 2026);
        assert!(client.medical_notes.is_none());
    }

    #[test]
    fn client_row_with_unknown_status_fails_to_map() {
        let row: ClientRow = serde_json::from_str(
            r#"{
                "id": "6f7f4a3e-98d2-4a0b-bb0b-0a8a6a0f1b11",
                "doula_id": "0e9a9c3a-0f7d-4a6b-8df1-2c2b9f6f2a22",
                "name": "Harper Lee",
                "contact": "",
                "edd": "2026-09-19",
                "pregnancy_week": 32,
                "status": "graduated",
                "notes": "",
                "medical_notes": null
            }"#,
        )
        .unwrap();

        assert!(Client::try_from(row).is_err());
    }

    #[test]
    fn birth_plan_sections_tolerate_missing_ids() {
        let row: BirthPlanRow = serde_json::from_str(
            r#"{
                "id": "2c52a7fb-4f7a-4dd5-9e5e-5f6a7f8b9c00",
                "client_id": "6f7f4a3e-98d2-4a0b-bb0b-0a8a6a0f1b11",
                "content": [
                    {"title": "Birth Environment", "body": "Dim lights."}
                ],
                "updated_at": "2026-08-01T10:00:00Z",
                "pdf_url": null
            }"#,
        )
        .unwrap();

        let plan = BirthPlan::from(row);
        assert_eq!(plan.sections.len(), 1);
        assert_eq!(plan.sections[0].title, "Birth Environment");
    }

    #[test]
    fn recommendation_row_round_trips_attachments() {
        let rec = Recommendation {
            id: RecommendationId::new(),
            client_id: ClientId::new(),
            title: "Weekly Prep".to_string(),
            content: "## Movement\n- Daily walks".to_string(),
            attachments: vec![RecommendationAttachment {
                id: crate::AttachmentId::new(),
                file_name: "HospitalBag.pdf".to_string(),
                url: "https://example.com/HospitalBag.pdf".to_string(),
                kind: crate::AttachmentKind::Pdf,
            }],
            updated_at: Timestamp::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&RecommendationRow::from(&rec)).unwrap();
        assert!(json.contains(r#""fileName":"HospitalBag.pdf""#));
        assert!(json.contains(r#""type":"pdf""#));

        let row: RecommendationRow = serde_json::from_str(&json).unwrap();
        assert_eq!(Recommendation::from(row), rec);
    }
}
