use markdown_html::{escape, to_html};

#[test]
fn plain_paragraph_round_trip() {
    assert_eq!(to_html("Hello world"), "<p>Hello world</p>");
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(to_html(""), "");
}

#[test]
fn headings() {
    assert_eq!(to_html("## Title"), "<h2>Title</h2>");
    assert_eq!(to_html("### Sub"), "<h3>Sub</h3>");
}

#[test]
fn heading_without_trailing_space_is_a_paragraph() {
    assert_eq!(to_html("##Title"), "<p>##Title</p>");
}

#[test]
fn adjacent_bullets_share_one_list() {
    assert_eq!(to_html("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
}

#[test]
fn blank_line_splits_lists() {
    let html = to_html("- a\n\n- b");
    assert_eq!(html.matches("<ul>").count(), 2);
    assert!(html.contains(r#"<div class="spacer"></div>"#));
}

#[test]
fn trailing_open_list_is_closed() {
    assert_eq!(to_html("text\n- a"), "<p>text</p>\n<ul>\n<li>a</li>\n</ul>");
}

#[test]
fn lone_dash_is_an_empty_bullet() {
    assert_eq!(to_html("- "), "<ul>\n<li></li>\n</ul>");
}

#[test]
fn bold_pairs_toggle() {
    assert_eq!(to_html("**x**"), "<p><strong>x</strong></p>");
    assert_eq!(
        to_html("a **b** c **d**"),
        "<p>a <strong>b</strong> c <strong>d</strong></p>"
    );
}

#[test]
fn unterminated_bold_is_auto_closed() {
    assert_eq!(to_html("**x"), "<p><strong>x</strong></p>");
}

#[test]
fn markdown_link_becomes_anchor() {
    assert_eq!(
        to_html("[Docs](https://example.com)"),
        "<p><a href=\"https://example.com\" target=\"_blank\" \
         rel=\"noopener noreferrer\">Docs</a></p>"
    );
}

#[test]
fn multiple_links_on_one_line() {
    let html = to_html("[a](https://a.test) and [b](https://b.test)");
    assert!(html.contains(r#"href="https://a.test""#));
    assert!(html.contains(r#"href="https://b.test""#));
    assert_eq!(html.matches("<a ").count(), 2);
}

#[test]
fn malformed_link_stays_literal() {
    assert_eq!(to_html("[broken](no-close"), "<p>[broken](no-close</p>");
    assert_eq!(to_html("[alone]"), "<p>[alone]</p>");
}

#[test]
fn bare_url_keeps_trailing_period_outside_anchor() {
    assert_eq!(
        to_html("See https://example.com."),
        "<p>See <a href=\"https://example.com\" target=\"_blank\" \
         rel=\"noopener noreferrer\">https://example.com</a>.</p>"
    );
}

#[test]
fn bare_url_without_punctuation() {
    let html = to_html("Visit http://example.org today");
    assert!(html.contains(
        "<a href=\"http://example.org\" target=\"_blank\" \
         rel=\"noopener noreferrer\">http://example.org</a>"
    ));
}

#[test]
fn script_tags_never_survive() {
    let html = to_html("<script>alert('x')</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn script_inside_link_title_is_escaped() {
    let html = to_html("[<script>](https://example.com)");
    assert!(!html.contains("<script>"));
}

#[test]
fn crlf_input_renders_like_lf() {
    assert_eq!(to_html("## A\r\n- b"), to_html("## A\n- b"));
}

#[test]
fn inline_rendering_applies_inside_heading_and_bullets() {
    assert_eq!(to_html("## **Bold** title"), "<h2><strong>Bold</strong> title</h2>");
    assert_eq!(
        to_html("- see https://example.com"),
        "<ul>\n<li>see <a href=\"https://example.com\" target=\"_blank\" \
         rel=\"noopener noreferrer\">https://example.com</a></li>\n</ul>"
    );
}

#[test]
fn escape_covers_the_five_entities() {
    assert_eq!(escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
}
