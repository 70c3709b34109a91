use jiff::{Timestamp, civil::date};
use payloads::{
    AttachmentId, AttachmentKind, BirthPlan, BirthPlanId, BirthPlanSection,
    Client, ClientId, ClientStatus, DoulaId, DoulaProfile, Recommendation,
    RecommendationAttachment, RecommendationId, SectionId,
};

fn sample_profile() -> DoulaProfile {
    DoulaProfile {
        id: DoulaId::new(),
        full_name: "Avery Thompson".to_string(),
        professional_title: "Certified Birth Doula".to_string(),
        experience_summary: "8 years supporting holistic births".to_string(),
        bio: "## About\nEvidence-based guidance and **emotional support**."
            .to_string(),
        photo_url: None,
        contact_email: "avery@example.com".to_string(),
        phone_number: "+1 (555) 010-8899".to_string(),
        website: Some("https://averydoula.example.com".to_string()),
        certifications: vec![
            "DONA International".to_string(),
            "CPR/AED".to_string(),
        ],
    }
}

fn sample_client() -> Client {
    Client {
        id: ClientId::new(),
        doula_id: DoulaId::new(),
        name: "Harper Lee".to_string(),
        contact_details: "harper@example.com".to_string(),
        estimated_due_date: date(2026, 9, 19),
        pregnancy_week: 32,
        status: ClientStatus::Preparing,
        notes: String::new(),
        medical_notes: None,
    }
}

#[test]
fn profile_page_is_standalone_and_noindexed() {
    let html = prerender::profile::build(&sample_profile());
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains(
        r#"<meta name="robots" content="noindex,nofollow,noarchive" />"#
    ));
    assert!(html.contains("<style>"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn profile_page_renders_bio_markdown() {
    let html = prerender::profile::build(&sample_profile());
    assert!(html.contains("<h2>About</h2>"));
    assert!(html.contains("<strong>emotional support</strong>"));
}

#[test]
fn profile_page_escapes_fields() {
    let mut profile = sample_profile();
    profile.full_name = "Avery <script> & Co".to_string();
    let html = prerender::profile::build(&profile);
    assert!(!html.contains("<script>"));
    assert!(html.contains("Avery &lt;script&gt; &amp; Co"));
}

#[test]
fn empty_name_falls_back_to_doula() {
    let mut profile = sample_profile();
    profile.full_name = String::new();
    let html = prerender::profile::build(&profile);
    assert!(html.contains("<h1>Doula</h1>"));
}

#[test]
fn blank_certifications_are_omitted_entirely() {
    let mut profile = sample_profile();
    profile.certifications = vec!["   ".to_string(), String::new()];
    let html = prerender::profile::build(&profile);
    assert!(!html.contains("Certifications"));

    profile.certifications = vec!["DONA International".to_string()];
    let html = prerender::profile::build(&profile);
    assert!(html.contains("<h2>Certifications</h2>"));
    assert!(html.contains("<li>DONA International</li>"));
}

#[test]
fn missing_website_omits_the_line() {
    let mut profile = sample_profile();
    profile.website = None;
    let html = prerender::profile::build(&profile);
    assert!(!html.contains("Website:"));
}

#[test]
fn cabinet_page_shows_client_header() {
    let html = prerender::cabinet::build(&sample_client(), None, None);
    assert!(html.contains("<h1>Harper Lee</h1>"));
    assert!(html.contains("EDD: Sep 19, 2026 • Week 32"));
    assert!(html.contains(
        r#"<meta name="robots" content="noindex,nofollow,noarchive" />"#
    ));
}

#[test]
fn cabinet_page_placeholders_when_nothing_saved() {
    let html = prerender::cabinet::build(&sample_client(), None, None);
    assert!(html.contains("No birth plan yet."));
    assert!(html.contains("No recommendations yet."));
}

#[test]
fn empty_birth_plan_renders_placeholder() {
    let client = sample_client();
    let plan = BirthPlan {
        id: BirthPlanId::new(),
        client_id: client.id,
        sections: Vec::new(),
        updated_at: Timestamp::UNIX_EPOCH,
    };
    let html = prerender::cabinet::build(&client, Some(&plan), None);
    assert!(html.contains("No birth plan yet."));
}

#[test]
fn birth_plan_sections_become_cards() {
    let client = sample_client();
    let plan = BirthPlan {
        id: BirthPlanId::new(),
        client_id: client.id,
        sections: vec![
            BirthPlanSection {
                id: SectionId::new(),
                title: "Pain Management".to_string(),
                body: "- Hydrotherapy\n- Hypnobirthing".to_string(),
            },
            BirthPlanSection {
                id: SectionId::new(),
                title: "Baby <Care>".to_string(),
                body: "Immediate skin-to-skin.".to_string(),
            },
        ],
        updated_at: Timestamp::UNIX_EPOCH,
    };
    let html = prerender::cabinet::build(&client, Some(&plan), None);
    assert!(html.contains("<h3>Pain Management</h3>"));
    assert!(html.contains("<li>Hydrotherapy</li>"));
    assert!(html.contains("<h3>Baby &lt;Care&gt;</h3>"));
}

#[test]
fn recommendation_attachments_are_escaped_links() {
    let client = sample_client();
    let recommendation = Recommendation {
        id: RecommendationId::new(),
        client_id: client.id,
        title: "Weekly Prep".to_string(),
        content: "## Movement\n- Daily walks".to_string(),
        attachments: vec![RecommendationAttachment {
            id: AttachmentId::new(),
            file_name: "Bag <v2>.pdf".to_string(),
            url: "https://example.com/bag.pdf".to_string(),
            kind: AttachmentKind::Pdf,
        }],
        updated_at: Timestamp::UNIX_EPOCH,
    };
    let html =
        prerender::cabinet::build(&client, None, Some(&recommendation));
    assert!(html.contains("<h3>Weekly Prep</h3>"));
    assert!(html.contains("<h3>Attachments</h3>"));
    assert!(html.contains(
        r#"<a href="https://example.com/bag.pdf" target="_blank" rel="noopener noreferrer">Bag &lt;v2&gt;.pdf</a>"#
    ));
    assert!(!html.contains("<v2>"));
}

#[test]
fn recommendation_without_attachments_has_no_attachments_card() {
    let client = sample_client();
    let recommendation = Recommendation {
        id: RecommendationId::new(),
        client_id: client.id,
        title: "Weekly Prep".to_string(),
        content: "Walk daily.".to_string(),
        attachments: Vec::new(),
        updated_at: Timestamp::UNIX_EPOCH,
    };
    let html =
        prerender::cabinet::build(&client, None, Some(&recommendation));
    assert!(!html.contains("Attachments"));
}
