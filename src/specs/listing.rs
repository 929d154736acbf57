// src/specs/listing.rs
//! Scraping *spec* for a state listing page.
//!
//! The listing enumerates trails as relative links (`/trail/<slug>/`). The same
//! trail is usually linked several times (card title, thumbnail, "view map",
//! "photos"), so candidates are filtered and de-duplicated here.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static TRAIL_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)href\s*=\s*["'](/trail/[^"'?#\s]+)["'?#]"#).unwrap()
});

/// Sub-resources of a trail page that are not the trail itself, at any depth
/// below the slug (`/trail/x/map/`, `/trail/x/photos/123/`).
static AUX_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^/trail/[^/]+/(?:map|photos?)(?:/|$)").unwrap()
});

/// Absolute trail URLs referenced by `doc`, first occurrence order, no duplicates.
pub fn extract_trail_links(doc: &str, base_url: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for caps in TRAIL_HREF.captures_iter(doc) {
        let Some(m) = caps.get(1) else { continue };
        let path = m.as_str();
        if AUX_SUFFIX.is_match(path) {
            continue;
        }
        if seen.insert(path) {
            out.push(format!("{base}{path}"));
        }
    }
    out
}
