//! Public doula profile page.

use markdown_html::escape;
use payloads::DoulaProfile;

use crate::BRAND;

const STYLE: &str = r#"    :root { color-scheme: light dark; }
    body { margin: 0; font-family: system-ui, Segoe UI, Roboto, Helvetica, Arial, sans-serif; background: #f6f6f8; color: #111; }
    .wrap { max-width: 760px; margin: 0 auto; padding: 20px 16px 40px; }
    header { background: #fff; border: 1px solid #e5e5ea; border-radius: 12px; padding: 14px 16px; }
    .brand { font-size: 12px; letter-spacing: 0.08em; text-transform: uppercase; color: #666; }
    h1 { margin: 6px 0 2px; font-size: 24px; }
    .subtitle { color: #666; font-size: 14px; margin: 0; }
    h2 { margin: 18px 0 8px; font-size: 16px; }
    p { margin: 0 0 10px; line-height: 1.4; }
    .card { background: #fff; border: 1px solid #e5e5ea; border-radius: 12px; padding: 14px 16px; margin-top: 12px; }
    a { color: #0a66c2; text-decoration: none; }
    a:hover { text-decoration: underline; }
    @media (prefers-color-scheme: dark) {
      body { background: #0b0b0d; color: #f3f3f5; }
      header, .card { background: #121216; border-color: #2a2a30; }
      .brand, .subtitle { color: #a7a7ad; }
      a { color: #6fb3ff; }
    }"#;

/// Build the standalone profile page for a doula.
///
/// Every plain-text field is escaped on its own; the bio goes through the
/// Markdown renderer. The website line and the certifications card are
/// omitted entirely when there is nothing to show.
pub fn build(profile: &DoulaProfile) -> String {
    let name = if profile.full_name.is_empty() {
        "Doula".to_string()
    } else {
        escape(&profile.full_name)
    };
    let title = escape(&profile.professional_title);
    let experience = escape(&profile.experience_summary);
    let bio = markdown_html::to_html(&profile.bio);
    let email = escape(&profile.contact_email);
    let phone = escape(&profile.phone_number);

    let website_html = match profile.website.as_deref() {
        Some(website) if !website.is_empty() => {
            let website = escape(website);
            format!(
                "<p><strong>Website:</strong> <a href=\"{website}\">{website}</a></p>"
            )
        }
        _ => String::new(),
    };

    let certifications: Vec<String> = profile
        .certifications
        .iter()
        .filter(|cert| !cert.trim().is_empty())
        .map(|cert| format!("<li>{}</li>", escape(cert)))
        .collect();
    let cert_card = if certifications.is_empty() {
        String::new()
    } else {
        format!(
            "\n    <div class=\"card\">\n      <h2>Certifications</h2><ul>{}</ul>\n    </div>",
            certifications.join("\n")
        )
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="robots" content="noindex,nofollow,noarchive" />
  <title>{name} • {BRAND}</title>
  <style>
{STYLE}
  </style>
</head>
<body>
  <div class="wrap">
    <header>
      <div class="brand">{BRAND}</div>
      <h1>{name}</h1>
      <p class="subtitle">{title}</p>
      <p class="subtitle">{experience}</p>
    </header>

    <div class="card">
      <h2>Bio</h2>
      <div>{bio}</div>
    </div>

    <div class="card">
      <h2>Contact</h2>
      <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
      <p><strong>Phone:</strong> {phone}</p>
      {website_html}
    </div>{cert_card}
  </div>
</body>
</html>
"#
    )
}
