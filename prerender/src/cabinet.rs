//! Client mini-cabinet page: birth plan plus recommendations behind a
//! tokenized link.

use markdown_html::escape;
use payloads::{BirthPlan, Client, Recommendation};

use crate::{BRAND, format_date};

const STYLE: &str = r#"    :root { color-scheme: light dark; }
    body { margin: 0; font-family: system-ui, Segoe UI, Roboto, Helvetica, Arial, sans-serif; background: #f6f6f8; color: #111; }
    .wrap { max-width: 760px; margin: 0 auto; padding: 20px 16px 40px; }
    header { margin: 10px 0 18px; }
    .brand { font-size: 12px; letter-spacing: 0.08em; text-transform: uppercase; color: #666; }
    h1 { margin: 6px 0 4px; font-size: 24px; }
    .meta { color: #666; font-size: 13px; }
    .tabs { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; margin: 18px 0; }
    .tab { background: #fff; border-radius: 12px; padding: 12px 14px; border: 1px solid #e5e5ea; }
    .tab h2 { margin: 0; font-size: 15px; }
    .card { background: #fff; border-radius: 12px; padding: 12px 14px; border: 1px solid #e5e5ea; margin: 10px 0; }
    .card h3 { margin: 0 0 8px; font-size: 15px; }
    .content p { margin: 0 0 10px; line-height: 1.4; }
    .content h2, .content h3 { margin: 12px 0 6px; }
    .content ul { margin: 6px 0 10px 18px; }
    .spacer { height: 10px; }
    a { color: #0a66c2; text-decoration: none; }
    a:hover { text-decoration: underline; }
    .muted { color: #666; }
    @media (prefers-color-scheme: dark) {
      body { background: #0b0b0d; color: #f3f3f5; }
      .tab, .card { background: #121216; border-color: #2a2a30; }
      .brand, .meta, .muted { color: #a7a7ad; }
      a { color: #6fb3ff; }
    }"#;

const NO_PLAN: &str = r#"<p class="muted">No birth plan yet.</p>"#;
const NO_RECOMMENDATIONS: &str =
    r#"<p class="muted">No recommendations yet.</p>"#;

/// Build the standalone mini-cabinet page for one client.
///
/// Attachment names and urls are escaped independently of the Markdown
/// path; an absent or empty plan/recommendation renders a placeholder.
pub fn build(
    client: &Client,
    birth_plan: Option<&BirthPlan>,
    recommendation: Option<&Recommendation>,
) -> String {
    let title = if client.name.is_empty() {
        "Client".to_string()
    } else {
        escape(&client.name)
    };
    let edd = escape(&format_date(client.estimated_due_date));
    let week = client.pregnancy_week;

    let birth_plan_html = birth_plan
        .map(render_birth_plan)
        .unwrap_or_else(|| NO_PLAN.to_string());
    let recommendation_html = recommendation
        .map(render_recommendation)
        .unwrap_or_else(|| NO_RECOMMENDATIONS.to_string());

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="robots" content="noindex,nofollow,noarchive" />
  <title>{title} • {BRAND}</title>
  <style>
{STYLE}
  </style>
</head>
<body>
  <div class="wrap">
    <header>
      <div class="brand">{BRAND}</div>
      <h1>{title}</h1>
      <div class="meta">EDD: {edd} • Week {week}</div>
    </header>

    <div class="tabs">
      <div class="tab">
        <h2>Birth plan</h2>
      </div>
      <div class="tab">
        <h2>Recommendations</h2>
      </div>
    </div>

    <h2>Birth plan</h2>
    {birth_plan_html}

    <h2>Recommendations</h2>
    {recommendation_html}
  </div>
</body>
</html>
"#
    )
}

fn render_birth_plan(plan: &BirthPlan) -> String {
    if plan.sections.is_empty() {
        return NO_PLAN.to_string();
    }
    plan.sections
        .iter()
        .map(|section| {
            format!(
                "<section class=\"card\">\n  <h3>{}</h3>\n  <div class=\"content\">{}</div>\n</section>",
                escape(&section.title),
                markdown_html::to_html(&section.body)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut html = format!(
        "<section class=\"card\">\n  <h3>{}</h3>\n  <div class=\"content\">{}</div>\n</section>",
        escape(&recommendation.title),
        markdown_html::to_html(&recommendation.content)
    );

    if !recommendation.attachments.is_empty() {
        let items = recommendation
            .attachments
            .iter()
            .map(|attachment| {
                format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
                    escape(&attachment.url),
                    escape(&attachment.file_name)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        html.push_str(&format!(
            "\n<section class=\"card\">\n  <h3>Attachments</h3>\n  <ul>{items}</ul>\n</section>"
        ));
    }
    html
}
