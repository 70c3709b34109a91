//! Sample data in the shape the app seeds previews with.

use jiff::civil::Date;
use jiff::{Span, Timestamp};
use payloads::{
    AttachmentId, AttachmentKind, BirthPlan, BirthPlanId, BirthPlanSection,
    Client, ClientId, ClientStatus, DoulaId, DoulaProfile, Recommendation,
    RecommendationAttachment, RecommendationId, SectionId,
};

pub fn doula_profile() -> DoulaProfile {
    DoulaProfile {
        id: DoulaId::new(),
        full_name: "Avery Thompson".to_string(),
        professional_title: "Certified Birth Doula".to_string(),
        experience_summary: "8 years supporting holistic births".to_string(),
        bio: "Dedicated doula providing evidence-based guidance and \
              emotional support before, during, and after labor."
            .to_string(),
        photo_url: None,
        contact_email: "avery@birthprep.example".to_string(),
        phone_number: "+1 (555) 010-8899".to_string(),
        website: Some("https://averydoula.example.com".to_string()),
        certifications: vec![
            "DONA International".to_string(),
            "CPR/AED".to_string(),
            "Childbirth Educator".to_string(),
        ],
    }
}

pub fn clients(doula_id: DoulaId, today: Date) -> Vec<Client> {
    let due_in = |days: i64| {
        today
            .checked_add(Span::new().days(days))
            .unwrap_or(today)
    };
    vec![
        Client {
            id: ClientId::new(),
            doula_id,
            name: "Harper Lee".to_string(),
            contact_details: "harper@example.com / +1 (555) 010-1001"
                .to_string(),
            estimated_due_date: due_in(45),
            pregnancy_week: 32,
            status: ClientStatus::Preparing,
            notes: "Prefers water birth, low-light environment.".to_string(),
            medical_notes: Some(
                "Gestational diabetes diet controlled.".to_string(),
            ),
        },
        Client {
            id: ClientId::new(),
            doula_id,
            name: "Quinn Parker".to_string(),
            contact_details: "quinn@example.com / +1 (555) 010-4545"
                .to_string(),
            estimated_due_date: due_in(10),
            pregnancy_week: 38,
            status: ClientStatus::Approaching,
            notes: "Partner Alex will attend. Requests hypnobirthing cues."
                .to_string(),
            medical_notes: None,
        },
    ]
}

pub fn birth_plan(client: &Client, now: Timestamp) -> BirthPlan {
    let section = |title: &str, body: &str| BirthPlanSection {
        id: SectionId::new(),
        title: title.to_string(),
        body: body.to_string(),
    };
    BirthPlan {
        id: BirthPlanId::new(),
        client_id: client.id,
        sections: vec![
            section(
                "Birth Environment",
                "Dim lights, calming music playlist, access to birthing ball.",
            ),
            section(
                "Pain Management",
                "Hydrotherapy, hypnobirthing affirmations, nitrous optional.",
            ),
            section(
                "Baby Care",
                "Immediate skin-to-skin, delayed cord clamping, \
                 breastfeeding within 1 hour.",
            ),
        ],
        updated_at: now,
    }
}

pub fn recommendation(client: &Client, now: Timestamp) -> Recommendation {
    Recommendation {
        id: RecommendationId::new(),
        client_id: client.id,
        title: "Weekly Prep".to_string(),
        content: "## Movement\n- Daily walks\n- Prenatal yoga video: \
                  https://youtu.be/example\n\n### Nutrition\n- Iron-rich \
                  foods\n- Hydration goal: 3L/day"
            .to_string(),
        attachments: vec![RecommendationAttachment {
            id: AttachmentId::new(),
            file_name: "HospitalBag.pdf".to_string(),
            url: "https://example.com/HospitalBag.pdf".to_string(),
            kind: AttachmentKind::Pdf,
        }],
        updated_at: now,
    }
}
