//! Markdown-lite rendering and preview sanitization.

use capacita_content::markdown::{escape_html, sanitize_html};
use capacita_content::{render_markdown, MarkdownRenderer, RenderOptions};
use capacita_core::config::PreviewConfig;

fn raw() -> MarkdownRenderer {
    MarkdownRenderer::new(RenderOptions {
        sanitize: false,
        links_new_tab: true,
    })
}

#[test]
fn bold_comes_before_italic() {
    let html = render_markdown("**bold** and *italic*");
    let strong = html.find("<strong>bold</strong>").unwrap();
    let em = html.find("<em>italic</em>").unwrap();
    assert!(strong < em);
    assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>");
}

#[test]
fn headings_and_rule() {
    let html = raw().render("# Um\n## Dois\n### Três\n\n---");
    assert_eq!(html, "<h1>Um</h1>\n<h2>Dois</h2>\n<h3>Três</h3>\n<hr />");
}

#[test]
fn heading_followed_by_text_line() {
    let html = raw().render("# Título\nTexto solto");
    assert_eq!(html, "<h1>Título</h1>\n<p>Texto solto</p>");
}

#[test]
fn inline_constructs() {
    let html = raw().render("`code` ***both*** ~~old~~");
    assert_eq!(
        html,
        "<p><code>code</code> <strong><em>both</em></strong> <del>old</del></p>"
    );
}

#[test]
fn links_open_in_new_tab_by_default() {
    let html = raw().render("[Portal](https://capacita.app)");
    assert_eq!(
        html,
        r#"<p><a href="https://capacita.app" target="_blank" rel="noopener noreferrer">Portal</a></p>"#
    );

    let same_tab = MarkdownRenderer::new(RenderOptions {
        sanitize: false,
        links_new_tab: false,
    });
    assert_eq!(
        same_tab.render("[x](/y)"),
        r#"<p><a href="/y">x</a></p>"#
    );
}

#[test]
fn unordered_and_ordered_lists() {
    let html = raw().render("- um\n- dois\n\n1. primeiro\n2. segundo");
    assert_eq!(
        html,
        "<ul>\n<li>um</li>\n<li>dois</li>\n</ul>\n<ol>\n<li>primeiro</li>\n<li>segundo</li>\n</ol>"
    );
}

#[test]
fn star_list_items_are_not_italic() {
    let html = raw().render("* um\n* dois");
    assert_eq!(html, "<ul>\n<li>um</li>\n<li>dois</li>\n</ul>");
}

#[test]
fn list_directly_followed_by_text() {
    let html = raw().render("- item\nfora");
    assert_eq!(html, "<ul>\n<li>item</li>\n</ul>\n<p>fora</p>");
}

#[test]
fn consecutive_quote_lines_merge() {
    let html = raw().render("> um\n> dois");
    assert_eq!(html, "<blockquote>um<br />dois</blockquote>");
}

#[test]
fn paragraphs_and_line_breaks() {
    let html = raw().render("linha um\nlinha dois\n\n\n\noutro parágrafo");
    assert_eq!(html, "<p>linha um<br />linha dois</p>\n<p>outro parágrafo</p>");
}

#[test]
fn malformed_markdown_renders_literally() {
    let html = raw().render("**sem fim e [link sem url]");
    assert_eq!(html, "<p>**sem fim e [link sem url]</p>");
}

#[test]
fn preview_strips_scripts_and_handlers() {
    let html = render_markdown("oi <script>alert(1)</script>\n\n<img src=x onerror=alert(1)>");
    assert!(!html.contains("<script"));
    assert!(!html.contains("onerror"));
    assert!(html.contains("<img src=x>"));
}

#[test]
fn preview_neutralizes_javascript_links() {
    let html = render_markdown("[clique](javascript:steal)");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r##"href="#""##));
}

#[test]
fn preview_handles_angle_bracket_inside_quoted_attribute() {
    let html = render_markdown(r#"<img alt=">" onerror=alert(1) src=x>"#);
    assert!(!html.contains("onerror"));
    assert_eq!(html, r#"<p><img alt=">" src=x></p>"#);
}

#[test]
fn preview_neutralizes_entity_encoded_script_urls() {
    let html =
        render_markdown(r#"<a href="jav&#x61;script:alert(1)">x</a> [y](jav&#97;script:z)"#);
    assert!(!html.contains("script:"));
    assert_eq!(html.matches(r##"href="#""##).count(), 2);
}

#[test]
fn sanitize_can_be_disabled_by_config() {
    let config = PreviewConfig {
        sanitize: Some(false),
        ..PreviewConfig::default()
    };
    let renderer = MarkdownRenderer::from_config(&config);
    assert!(renderer.render_preview("<script>x</script>").contains("<script>"));
}

#[test]
fn sanitize_and_escape_are_exposed() {
    assert_eq!(sanitize_html("<embed src=a>ok"), "ok");
    assert_eq!(escape_html("<b>"), "&lt;b&gt;");
}

#[test]
fn all_patterns_compile() {
    for (name, pattern) in capacita_content::markdown::patterns::all_patterns() {
        assert!(pattern.is_some(), "pattern {name} failed to compile");
    }
}
