//! HTML to plain lowercase text.

use scraper::Html;

/// Strip markup from `html` and return lowercase visible text with
/// whitespace collapsed to single spaces.
///
/// The parser is permissive: malformed or truncated documents never fail,
/// they just yield a best-effort extraction. Text inside `script`, `style`,
/// and `noscript` elements is dropped.
pub fn text_from_html(html: &str) -> String {
    let doc = Html::parse_document(html);

    let mut out = String::with_capacity(html.len() / 4);
    for node in doc.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element())
            .map(|el| matches!(el.name(), "script" | "style" | "noscript"))
            .unwrap_or(false);
        if !hidden {
            out.push_str(&text.text);
            out.push(' ');
        }
    }

    out.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
