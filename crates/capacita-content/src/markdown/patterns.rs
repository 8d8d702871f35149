//! Compiled patterns for the markdown-lite renderer and the sanitizer.
//!
//! A pattern that fails to compile is `None` and its substitution step is
//! skipped, so rendering degrades instead of panicking.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! md_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Block structure ────────────────────────────────────────────────────────
md_pattern!(RE_H3, r"(?m)^###[ \t]+(.+?)[ \t]*$");
md_pattern!(RE_H2, r"(?m)^##[ \t]+(.+?)[ \t]*$");
md_pattern!(RE_H1, r"(?m)^#[ \t]+(.+?)[ \t]*$");
md_pattern!(RE_HR, r"(?m)^(?:-{3,}|\*{3,})[ \t]*$");
md_pattern!(RE_BLOCKQUOTE, r"(?m)^>[ \t]?(.*)$");

// ── Inline ─────────────────────────────────────────────────────────────────
md_pattern!(RE_CODE, r"`([^`\n]+)`");
md_pattern!(RE_BOLD_ITALIC, r"\*\*\*([^*\n]+?)\*\*\*");
md_pattern!(RE_BOLD, r"\*\*([^*\n]+?)\*\*");
// The opening asterisk must touch a word, so `* item` stays a list marker.
md_pattern!(RE_ITALIC, r"\*([^*\s][^*\n]*?)\*");
md_pattern!(RE_STRIKE, r"~~([^~\n]+?)~~");
md_pattern!(RE_LINK, r"\[([^\]\n]+)\]\(([^)\s]+)\)");

// ── Lists ──────────────────────────────────────────────────────────────────
md_pattern!(RE_ORDERED_ITEM, r"(?m)^[ \t]*\d+\.[ \t]+(.+)$");
md_pattern!(RE_UNORDERED_ITEM, r"(?m)^[ \t]*[-*+][ \t]+(.+)$");
md_pattern!(RE_OL_RUN, r#"(?m)(?:^<li data-list="ol">.*</li>\n?)+"#);
md_pattern!(RE_UL_RUN, r#"(?m)(?:^<li data-list="ul">.*</li>\n?)+"#);

// ── Paragraphs ─────────────────────────────────────────────────────────────
md_pattern!(RE_PARAGRAPH_BREAK, r"\n{2,}");

// ── Sanitizer ──────────────────────────────────────────────────────────────
// Attribute values are quote-aware, so a `>` inside quotes does not end a tag.
md_pattern!(
    RE_DANGEROUS_ELEMENT,
    r#"(?is)<(?:script|style|iframe|object|embed)\b(?:[^>"']|"[^"]*"|'[^']*')*>.*?</(?:script|style|iframe|object|embed)[ \t]*>"#
);
md_pattern!(
    RE_DANGEROUS_TAG,
    r#"(?i)</?(?:script|style|iframe|object|embed)\b(?:[^>"']|"[^"]*"|'[^']*')*>"#
);
md_pattern!(RE_OPEN_TAG, r#"<[a-zA-Z](?:[^>"']|"[^"]*"|'[^']*')*>"#);
md_pattern!(RE_TAG_NAME, r"^<([a-zA-Z][a-zA-Z0-9-]*)");
md_pattern!(
    RE_ATTRIBUTE,
    r#"([^\s"'<>/=]+)(?:[ \t\r\n]*=[ \t\r\n]*("[^"]*"|'[^']*'|[^\s"'<>`]+))?"#
);
md_pattern!(RE_CHAR_REF, r"&#(?:[xX]([0-9a-fA-F]{1,8})|([0-9]{1,10}));?");
md_pattern!(RE_URL_SCHEME, r"^([a-zA-Z][a-zA-Z0-9+.\-]*):");

/// Every pattern, for health checks.
pub fn all_patterns() -> [(&'static str, &'static LazyLock<Option<Regex>>); 23] {
    [
        ("h3", &RE_H3),
        ("h2", &RE_H2),
        ("h1", &RE_H1),
        ("hr", &RE_HR),
        ("blockquote", &RE_BLOCKQUOTE),
        ("code", &RE_CODE),
        ("bold_italic", &RE_BOLD_ITALIC),
        ("bold", &RE_BOLD),
        ("italic", &RE_ITALIC),
        ("strike", &RE_STRIKE),
        ("link", &RE_LINK),
        ("ordered_item", &RE_ORDERED_ITEM),
        ("unordered_item", &RE_UNORDERED_ITEM),
        ("ol_run", &RE_OL_RUN),
        ("ul_run", &RE_UL_RUN),
        ("paragraph_break", &RE_PARAGRAPH_BREAK),
        ("dangerous_element", &RE_DANGEROUS_ELEMENT),
        ("dangerous_tag", &RE_DANGEROUS_TAG),
        ("open_tag", &RE_OPEN_TAG),
        ("tag_name", &RE_TAG_NAME),
        ("attribute", &RE_ATTRIBUTE),
        ("char_ref", &RE_CHAR_REF),
        ("url_scheme", &RE_URL_SCHEME),
    ]
}
