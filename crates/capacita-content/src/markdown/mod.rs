//! Markdown-lite preview renderer.
//!
//! Not a markdown parser: an ordered chain of regex substitutions over the
//! whole input. Nested or overlapping constructs resolve by substitution
//! order (headings, rule, blockquote, code, emphasis, strikethrough, links,
//! lists, then paragraphs). Output meant for the DOM goes through
//! [`sanitize_html`] first; [`MarkdownRenderer::render_preview`] does both.

pub mod patterns;
mod sanitize;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use capacita_core::config::PreviewConfig;

pub use sanitize::{escape_html, sanitize_html};

use patterns::*;

const LINK_NEW_TAB_ATTRS: &str = r#" target="_blank" rel="noopener noreferrer""#;

/// Tags that start a block-level line and are never wrapped in `<p>`.
const BLOCK_TAGS: [&str; 10] = [
    "<h1", "<h2", "<h3", "<hr", "<ul", "</ul", "<ol", "</ol", "<li", "<blockquote",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Run [`sanitize_html`] in `render_preview`.
    pub sanitize: bool,
    /// Open links in a new tab.
    pub links_new_tab: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sanitize: true,
            links_new_tab: true,
        }
    }
}

impl From<&PreviewConfig> for RenderOptions {
    fn from(config: &PreviewConfig) -> Self {
        Self {
            sanitize: config.effective_sanitize(),
            links_new_tab: config.effective_links_new_tab(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &PreviewConfig) -> Self {
        Self::new(RenderOptions::from(config))
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Run the substitution chain. Raw HTML in the input passes through
    /// untouched; use [`render_preview`](Self::render_preview) for DOM output.
    pub fn render(&self, markdown: &str) -> String {
        let mut html = markdown.replace("\r\n", "\n");

        html = substitute(&RE_H3, html, "<h3>${1}</h3>");
        html = substitute(&RE_H2, html, "<h2>${1}</h2>");
        html = substitute(&RE_H1, html, "<h1>${1}</h1>");
        html = substitute(&RE_HR, html, "<hr />");
        html = substitute(&RE_BLOCKQUOTE, html, "<blockquote>${1}</blockquote>");
        html = html.replace("</blockquote>\n<blockquote>", "<br />");

        html = substitute(&RE_CODE, html, "<code>${1}</code>");
        html = substitute(&RE_BOLD_ITALIC, html, "<strong><em>${1}</em></strong>");
        html = substitute(&RE_BOLD, html, "<strong>${1}</strong>");
        html = substitute(&RE_ITALIC, html, "<em>${1}</em>");
        html = substitute(&RE_STRIKE, html, "<del>${1}</del>");

        let link = if self.options.links_new_tab {
            format!(r#"<a href="${{2}}"{LINK_NEW_TAB_ATTRS}>${{1}}</a>"#)
        } else {
            r#"<a href="${2}">${1}</a>"#.to_string()
        };
        html = substitute(&RE_LINK, html, &link);

        html = substitute(&RE_ORDERED_ITEM, html, r#"<li data-list="ol">${1}</li>"#);
        html = substitute(&RE_UNORDERED_ITEM, html, r#"<li data-list="ul">${1}</li>"#);
        html = wrap_list_runs(&RE_OL_RUN, html, "ol");
        html = wrap_list_runs(&RE_UL_RUN, html, "ul");
        html = html
            .replace(r#" data-list="ol""#, "")
            .replace(r#" data-list="ul""#, "");

        paragraphs(&html)
    }

    /// Render, then sanitize unless disabled in the options.
    pub fn render_preview(&self, markdown: &str) -> String {
        let html = self.render(markdown);
        if self.options.sanitize {
            sanitize_html(&html)
        } else {
            html
        }
    }
}

/// Sanitized preview with default options.
pub fn render_markdown(markdown: &str) -> String {
    MarkdownRenderer::default().render_preview(markdown)
}

fn substitute(pattern: &LazyLock<Option<Regex>>, text: String, replacement: &str) -> String {
    match pattern.as_ref() {
        Some(re) => re.replace_all(&text, replacement).into_owned(),
        None => text,
    }
}

/// Wrap each run of consecutive `<li>` lines in `<ol>`/`<ul>`.
fn wrap_list_runs(pattern: &LazyLock<Option<Regex>>, text: String, tag: &str) -> String {
    let Some(re) = pattern.as_ref() else {
        return text;
    };
    re.replace_all(&text, |caps: &Captures| {
        let run = &caps[0];
        let tail = if run.ends_with('\n') { "\n" } else { "" };
        format!("<{tag}>\n{}\n</{tag}>{tail}", run.trim_end_matches('\n'))
    })
    .into_owned()
}

fn is_block_line(line: &str) -> bool {
    let line = line.trim_start();
    BLOCK_TAGS.iter().any(|tag| line.starts_with(tag))
}

/// Split on blank lines; inline runs become `<p>` with `<br />` between
/// lines, block-level lines are emitted as they are.
fn paragraphs(html: &str) -> String {
    let chunks: Vec<&str> = match RE_PARAGRAPH_BREAK.as_ref() {
        Some(re) => re.split(html).collect(),
        None => vec![html],
    };

    let mut out: Vec<String> = Vec::new();
    for chunk in chunks {
        let mut inline: Vec<&str> = Vec::new();
        for line in chunk.lines() {
            if is_block_line(line) {
                flush_paragraph(&mut inline, &mut out);
                out.push(line.trim().to_string());
            } else if !line.trim().is_empty() {
                inline.push(line.trim());
            }
        }
        flush_paragraph(&mut inline, &mut out);
    }
    out.join("\n")
}

fn flush_paragraph(inline: &mut Vec<&str>, out: &mut Vec<String>) {
    if !inline.is_empty() {
        out.push(format!("<p>{}</p>", inline.join("<br />")));
        inline.clear();
    }
}
