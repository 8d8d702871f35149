//! HTML sanitization for rendered previews.
//!
//! Removes executable content from renderer output: script-like elements,
//! inline event handlers and script URLs. Every remaining open tag is rebuilt
//! from the attributes parsed out of it, so what reaches the DOM is exactly
//! what was inspected.

use regex::Captures;

use super::patterns::{
    RE_ATTRIBUTE, RE_CHAR_REF, RE_DANGEROUS_ELEMENT, RE_DANGEROUS_TAG, RE_OPEN_TAG, RE_TAG_NAME,
    RE_URL_SCHEME,
};

/// Attributes whose value the browser loads or navigates to.
const URL_ATTRIBUTES: [&str; 8] = [
    "href",
    "src",
    "action",
    "formaction",
    "xlink:href",
    "poster",
    "background",
    "cite",
];

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Inline images the editor stores as data URLs.
const SAFE_IMAGE_DATA_PREFIXES: [&str; 4] = [
    "data:image/png",
    "data:image/jpeg",
    "data:image/gif",
    "data:image/webp",
];

/// Strip `script`, `style`, `iframe`, `object` and `embed` elements,
/// `on*` attributes, and URLs whose scheme is not `http`, `https` or
/// `mailto`. Character references are decoded before the scheme check.
pub fn sanitize_html(html: &str) -> String {
    let mut out = html.to_string();

    if let Some(re) = RE_DANGEROUS_ELEMENT.as_ref() {
        out = re.replace_all(&out, "").into_owned();
    }
    if let Some(re) = RE_DANGEROUS_TAG.as_ref() {
        out = re.replace_all(&out, "").into_owned();
    }
    if let Some(re) = RE_OPEN_TAG.as_ref() {
        out = re
            .replace_all(&out, |caps: &Captures| clean_tag(&caps[0]))
            .into_owned();
    }
    out
}

/// Rebuild an open tag keeping only safe attributes. A tag that cannot be
/// parsed is dropped.
fn clean_tag(tag: &str) -> String {
    let (Some(name_re), Some(attr_re)) = (RE_TAG_NAME.as_ref(), RE_ATTRIBUTE.as_ref()) else {
        return String::new();
    };
    let Some(name) = name_re.captures(tag).and_then(|caps| caps.get(1)) else {
        return String::new();
    };

    let inner = &tag[name.end()..tag.len() - 1];
    let mut out = format!("<{}", name.as_str());
    for caps in attr_re.captures_iter(inner) {
        let attr = caps[1].to_ascii_lowercase();
        if attr.starts_with("on") {
            continue;
        }
        match caps.get(2) {
            Some(value) if is_url_attribute(&attr) && !is_safe_url(&attr, value.as_str()) => {
                out.push_str(&format!(" {}=\"#\"", &caps[1]));
            }
            _ => {
                out.push(' ');
                out.push_str(&caps[0]);
            }
        }
    }
    if inner.trim_end().ends_with('/') {
        out.push_str(" /");
    }
    out.push('>');
    out
}

fn is_url_attribute(attr: &str) -> bool {
    URL_ATTRIBUTES.contains(&attr)
}

/// Whether a (possibly quoted, possibly entity-encoded) URL value is safe to
/// keep. Relative URLs are safe; absolute ones need an allowed scheme.
fn is_safe_url(attr: &str, raw: &str) -> bool {
    let url = normalize_url(unquote(raw));
    if attr == "src"
        && SAFE_IMAGE_DATA_PREFIXES
            .iter()
            .any(|prefix| url.starts_with(prefix))
    {
        return true;
    }
    match RE_URL_SCHEME.as_ref() {
        Some(re) => re
            .captures(&url)
            .map_or(true, |caps| SAFE_SCHEMES.contains(&&caps[1])),
        None => !url.contains(':'),
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Decode character references and drop whitespace and control characters,
/// the way a browser reads a URL scheme. Lowercased.
fn normalize_url(value: &str) -> String {
    let decoded = match RE_CHAR_REF.as_ref() {
        Some(re) => re
            .replace_all(value, |caps: &Captures| {
                let code = match (caps.get(1), caps.get(2)) {
                    (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                    (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
                    (None, None) => None,
                };
                code.and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
                    .to_string()
            })
            .into_owned(),
        None => value.to_string(),
    };
    decoded
        .to_ascii_lowercase()
        .replace("&colon;", ":")
        .replace("&tab;", "")
        .replace("&newline;", "")
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect()
}

/// Escape text for literal display inside HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_elements() {
        let html = "<p>oi</p><script>alert(1)</script><p>tchau</p>";
        assert_eq!(sanitize_html(html), "<p>oi</p><p>tchau</p>");
    }

    #[test]
    fn removes_unclosed_iframe() {
        assert_eq!(sanitize_html(r#"<iframe src="https://x">"#), "");
    }

    #[test]
    fn strips_event_handlers() {
        let html = r#"<img src="a.png" onerror="alert(1)" alt="x">"#;
        assert_eq!(sanitize_html(html), r#"<img src="a.png" alt="x">"#);
    }

    #[test]
    fn neutralizes_javascript_urls() {
        let html = r#"<a href="javascript:alert(1)">x</a>"#;
        assert_eq!(sanitize_html(html), r##"<a href="#">x</a>"##);
    }

    #[test]
    fn leaves_prose_untouched() {
        let html = "<p>the onclick=handler pattern is discussed here</p>";
        assert_eq!(sanitize_html(html), html);
    }

    #[test]
    fn quoted_angle_bracket_does_not_hide_handlers() {
        let html = r#"<img alt=">" onerror=alert(1) src=x>"#;
        assert_eq!(sanitize_html(html), r#"<img alt=">" src=x>"#);
    }

    #[test]
    fn slash_separated_handler_is_removed() {
        assert_eq!(sanitize_html("<img/onerror=alert(1) src=x>"), "<img src=x>");
    }

    #[test]
    fn entity_encoded_scheme_is_neutralized() {
        for html in [
            r#"<a href="jav&#x61;script:alert(1)">x</a>"#,
            r#"<a href="jav&#97script:alert(1)">x</a>"#,
            r#"<a href="java&Tab;script&colon;alert(1)">x</a>"#,
            r#"<a href=" JAVASCRIPT:alert(1)">x</a>"#,
        ] {
            assert_eq!(sanitize_html(html), r##"<a href="#">x</a>"##, "{html}");
        }
    }

    #[test]
    fn safe_urls_are_kept() {
        for html in [
            r#"<a href="https://capacita.app/t?id=1">x</a>"#,
            r#"<a href="mailto:rh@empresa.com.br">x</a>"#,
            r#"<a href="/treinamentos/42">x</a>"#,
            r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#,
        ] {
            assert_eq!(sanitize_html(html), html);
        }
        assert_eq!(
            sanitize_html(r#"<a href="data:text/html,oi">x</a>"#),
            r##"<a href="#">x</a>"##
        );
    }

    #[test]
    fn self_closing_tags_keep_their_slash() {
        assert_eq!(sanitize_html("<hr /><br/>"), "<hr /><br />");
    }

    #[test]
    fn escape_html_covers_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
