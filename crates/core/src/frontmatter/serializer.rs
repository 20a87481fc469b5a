//! Serialization of post metadata and body back to a raw document.

use super::reader::DELIMITER;
use super::types::PostDraft;

/// Build a raw post document from metadata and a markdown body.
///
/// The block always carries `title`, `slug`, `description` and `keywords`;
/// `coverImage` is written only when present and non-empty. The body follows
/// a blank line, verbatim.
pub fn serialize(meta: &PostDraft, body: &str) -> String {
    let keywords = meta.keywords.iter().map(|k| quote(k)).collect::<Vec<_>>().join(", ");

    let mut lines = vec![
        DELIMITER.to_string(),
        format!("title: {}", quote(&meta.title)),
        format!("slug: {}", quote(&meta.slug)),
        format!("description: {}", quote(meta.description.as_deref().unwrap_or_default())),
        format!("keywords: [{keywords}]"),
    ];
    if let Some(cover) = meta.cover_image.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("coverImage: {}", quote(cover)));
    }
    lines.push(DELIMITER.to_string());
    lines.push(String::new());
    lines.push(body.to_string());

    lines.join("\n")
}

/// Quote a scalar as a JSON string that YAML reads back unchanged.
///
/// Characters YAML refuses in a stream or folds as line breaks are written
/// as `\u` escapes, which are valid in both grammars.
fn quote(value: &str) -> String {
    let json = serde_json::Value::from(value).to_string();
    if !json.chars().any(needs_escape) {
        return json;
    }

    let mut out = String::with_capacity(json.len() + 8);
    for c in json.chars() {
        if needs_escape(c) {
            out.push_str(&format!("\\u{:04x}", u32::from(c)));
        } else {
            out.push(c);
        }
    }
    out
}

fn needs_escape(c: char) -> bool {
    matches!(c, '\u{7f}'..='\u{9f}' | '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}')
}
