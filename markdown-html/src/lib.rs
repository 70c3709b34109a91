//! Markdown to HTML conversion for untrusted user text.
//!
//! Not a general Markdown engine: a fixed, line-oriented subset used by
//! the public page builders.
//!
//! - Headings: `##` and `###`
//! - Bullets: `- `
//! - Bold: `**text**`
//! - Links: `[title](url)` and raw `https://...`
//!
//! Every line is HTML-escaped before any markup is inserted, so the
//! output is safe to embed as-is. Malformed input never fails; it
//! degrades to literal escaped text.
//!
//! ```rust
//! use markdown_html::to_html;
//!
//! assert_eq!(to_html("Hello world"), "<p>Hello world</p>");
//! assert_eq!(to_html("## Title"), "<h2>Title</h2>");
//! ```

/// Bullet-list tracking across lines. An open list must be closed on any
/// non-bullet line and at end of input.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    Inside,
}

/// Convert a Markdown blob to an HTML fragment.
///
/// Line endings are normalized to `\n` first; each line is then classified
/// as blank, heading, bullet or paragraph. Empty input produces empty
/// output.
pub fn to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let normalized = markdown.replace("\r\n", "\n");
    let mut html: Vec<String> = Vec::new();
    let mut list = ListState::Outside;

    for raw_line in normalized.split('\n') {
        let line = raw_line.trim();

        if line.is_empty() {
            close_list(&mut list, &mut html);
            html.push(r#"<div class="spacer"></div>"#.to_string());
            continue;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            close_list(&mut list, &mut html);
            html.push(format!("<h3>{}</h3>", inline(rest)));
            continue;
        }
        if let Some(rest) = line.strip_prefix("## ") {
            close_list(&mut list, &mut html);
            html.push(format!("<h2>{}</h2>", inline(rest)));
            continue;
        }

        if let Some(rest) = bullet_text(line) {
            if list == ListState::Outside {
                html.push("<ul>".to_string());
                list = ListState::Inside;
            }
            html.push(format!("<li>{}</li>", inline(rest)));
            continue;
        }

        close_list(&mut list, &mut html);
        html.push(format!("<p>{}</p>", inline(line)));
    }

    close_list(&mut list, &mut html);
    html.join("\n")
}

fn close_list(list: &mut ListState, html: &mut Vec<String>) {
    if *list == ListState::Inside {
        html.push("</ul>".to_string());
        *list = ListState::Outside;
    }
}

/// A lone `-` is a bullet whose text the line trim removed.
fn bullet_text(line: &str) -> Option<&str> {
    match line.strip_prefix("- ") {
        Some(rest) => Some(rest),
        None if line == "-" => Some(""),
        None => None,
    }
}

fn inline(text: &str) -> String {
    let escaped = escape(text);
    let bolded = replace_bold(&escaped);
    let linked = replace_markdown_links(&bolded);
    linkify_urls(&linked)
}

/// HTML-escape the five characters that matter: `& < > " '`.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Each `**` toggles a bold span; an unterminated final toggle is closed
/// at end of line rather than left dangling.
fn replace_bold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut open = false;
    let mut rest = s;
    while let Some(pos) = rest.find("**") {
        out.push_str(&rest[..pos]);
        out.push_str(if open { "</strong>" } else { "<strong>" });
        open = !open;
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    if open {
        out.push_str("</strong>");
    }
    out
}

/// Replace `[title](url)` patterns left to right: first `[`, first `]`
/// after it that is immediately followed by `(`, up to the first `)`.
/// Title and url are re-escaped independently. Anything that does not
/// complete the pattern stays literal.
fn replace_markdown_links(s: &str) -> String {
    let mut result = s.to_string();
    loop {
        let Some(open) = result.find('[') else { break };
        let Some(close) = result[open..].find(']').map(|i| open + i) else {
            break;
        };
        let after_close = close + 1;
        if !result[after_close..].starts_with('(') {
            break;
        }
        let Some(paren) =
            result[after_close..].find(')').map(|i| after_close + i)
        else {
            break;
        };

        let title = escape(&result[open + 1..close]);
        let url = escape(&result[after_close + 1..paren]);
        let replacement = format!(
            "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{title}</a>"
        );
        result.replace_range(open..=paren, &replacement);
    }
    result
}

const TRAILING_PUNCTUATION: &[char] =
    &['.', ',', ';', ':', '!', '?', ')', '"', '\''];

/// Wrap whitespace-delimited `http(s)://` tokens in anchors. Trailing
/// punctuation is stripped from the url and emitted after the anchor.
fn linkify_urls(s: &str) -> String {
    s.split(' ')
        .map(|part| {
            if part.starts_with("https://") || part.starts_with("http://") {
                let url = part.trim_end_matches(TRAILING_PUNCTUATION);
                let trailing = &part[url.len()..];
                let url = escape(url);
                format!(
                    "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{url}</a>{trailing}"
                )
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
