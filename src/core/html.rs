// src/core/html.rs
// Case-insensitive slicing over raw markup. No DOM: trail pages are read
// with string scanning and regexes, never parsed into a tree.

use super::sanitize::{normalize_entities, normalize_ws};

/// ASCII-only lowercasing, so byte offsets stay valid in the original string.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner markup between the first `open_pat` tag (attributes allowed) and the next `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Remove every `<...>` tag and collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => { in_tag = true; out.push(' '); }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Markup fragment to plain text: tags stripped, entities decoded, whitespace collapsed.
pub fn text_of(fragment: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(fragment)))
}

/// `doc` with `<script>`, `<style>` and `<noscript>` blocks removed, other tags kept.
/// Run before any text pattern so inline JSON never reads as prose.
pub fn content_markup(doc: &str) -> String {
    let mut body = doc.to_string();
    for tag in ["script", "style", "noscript"] {
        body = drop_blocks_ci(&body, tag);
    }
    body
}

fn drop_blocks_ci(s: &str, tag: &str) -> String {
    let lc = to_lower(s);
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let mut out = String::with_capacity(s.len());
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&open) {
        let start = pos + rel;
        out.push_str(&s[pos..start]);
        match lc[start..].find(&close) {
            Some(end_rel) => pos = start + end_rel + close.len(),
            // unterminated block: drop the rest
            None => return out,
        }
    }
    out.push_str(&s[pos..]);
    out
}
