// src/specs/trail.rs
//! Scraping *spec* for a trail detail page.
//!
//! Every field is read by an ordered list of extractors. The first one that
//! returns `Some` wins; if none do, the field keeps its empty default. Nothing
//! here fails: a page that matches no pattern still produces a `Trail`, which
//! the orchestrator then drops for lacking a name or length.
//!
//! Text-oriented patterns (length, rating, cities, surface vocabulary) run on
//! the page's visible text. The labeled surface field runs on markup with
//! script and style blocks removed. Meta tags and coordinates read the raw
//! markup, since map widgets keep their positions in inline scripts.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::config::consts::DESCRIPTION_MAX_CHARS;
use crate::core::html::{content_markup, slice_between_ci, text_of};
use crate::core::sanitize::{title_case, truncate_chars};
use crate::region::Region;
use crate::trail::{Coordinates, Trail};

/// A fetched document, with its script-free markup and visible text computed once.
struct Page<'a> {
    raw: &'a str,
    markup: String,
    text: String,
}

impl<'a> Page<'a> {
    fn new(raw: &'a str) -> Self {
        let markup = content_markup(raw);
        let text = text_of(&markup);
        Self { raw, markup, text }
    }
}

type Extractor<T> = fn(&Page<'_>) -> Option<T>;

fn first_match<T>(page: &Page<'_>, extractors: &[Extractor<T>]) -> Option<T> {
    extractors.iter().find_map(|extract| extract(page))
}

const NAME: &[Extractor<String>] = &[name_from_h1];
const LENGTH: &[Extractor<f64>] = &[length_with_unit, length_labeled];
const SURFACE: &[Extractor<String>] = &[surface_labeled, surface_vocabulary];
const DESCRIPTION: &[Extractor<String>] = &[
    description_meta,
    description_meta_reversed,
    description_og,
    description_paragraph,
];
const COORDINATES: &[Extractor<Coordinates>] = &[coordinates_labeled];
const LONGITUDE: &[Extractor<f64>] = &[lng_longitude, lng_lng, lng_long, lng_lon];
const RATING: &[Extractor<f64>] = &[rating_stars, rating_labeled];
const CITIES: &[Extractor<String>] = &[cities_phrase];

/// Best-effort record for one trail page.
pub fn parse_trail(doc: &str, source_url: &str, region: Region) -> Trail {
    let page = Page::new(doc);
    let mut trail = Trail::new(source_url, region);

    if let Some(name) = first_match(&page, NAME) { trail.name = name; }
    if let Some(length) = first_match(&page, LENGTH) { trail.length = length; }
    if let Some(surface) = first_match(&page, SURFACE) { trail.surface = surface; }
    if let Some(description) = first_match(&page, DESCRIPTION) { trail.description = description; }
    trail.coordinates = first_match(&page, COORDINATES);
    trail.rating = first_match(&page, RATING);
    if let Some(cities) = first_match(&page, CITIES) { trail.cities = cities; }

    debug!(
        url = source_url,
        region = %region,
        name = %trail.name,
        length = trail.length,
        has_coordinates = trail.coordinates.is_some(),
        "parsed trail page"
    );
    trail
}

/* ---------- name ---------- */

/// Trailing qualifier spellings and their canonical form (matched case-insensitively).
const QUALIFIERS: &[(&str, &str)] = &[
    ("rail-trail", "Rail Trail"),
    ("railtrail", "Rail Trail"),
    ("trl.", "Trail"),
    ("trl", "Trail"),
    ("tr.", "Trail"),
    ("trail", "Trail"),
];

fn name_from_h1(page: &Page<'_>) -> Option<String> {
    let inner = slice_between_ci(page.raw, "<h1", "</h1>")?;
    let name = normalize_trailing_qualifier(&text_of(inner));
    (!name.is_empty()).then_some(name)
}

pub fn normalize_trailing_qualifier(name: &str) -> String {
    let name = name.trim();
    let Some((head, last)) = name.rsplit_once(' ') else {
        return name.to_string();
    };
    QUALIFIERS
        .iter()
        .find(|(variant, _)| last.eq_ignore_ascii_case(variant))
        .map(|(_, canonical)| format!("{} {canonical}", head.trim_end()))
        .unwrap_or_else(|| name.to_string())
}

/* ---------- length ---------- */

static LENGTH_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,4}(?:\.\d+)?)\s*(?:mi|miles?)\b").unwrap()
});
static LENGTH_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\blength\s*:\s*(\d{1,4}(?:\.\d+)?)").unwrap()
});

fn length_with_unit(page: &Page<'_>) -> Option<f64> {
    capture_f64(&LENGTH_UNIT, &page.text)
}

fn length_labeled(page: &Page<'_>) -> Option<f64> {
    capture_f64(&LENGTH_LABEL, &page.text)
}

/* ---------- surface ---------- */

// Skip whatever tags sit between the label and its value, then take text up to the next tag.
static SURFACE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\bsurface\s*:\s*(?:<[^>]*>\s*)*([^<]{1,80})").unwrap()
});
static SURFACE_VOCAB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(crushed stone|wood chips|asphalt|concrete|gravel|dirt|grass|boardwalk|ballast|cinder|sand)\b",
    )
    .unwrap()
});

fn surface_labeled(page: &Page<'_>) -> Option<String> {
    let caps = SURFACE_LABEL.captures(&page.markup)?;
    non_empty(text_of(&caps[1]))
}

fn surface_vocabulary(page: &Page<'_>) -> Option<String> {
    let caps = SURFACE_VOCAB.captures(&page.text)?;
    Some(title_case(&caps[1]))
}

/* ---------- description ---------- */

static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<meta\s[^>]*?name\s*=\s*["']description["'][^>]*?content\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
    )
    .unwrap()
});
static META_DESCRIPTION_REVERSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<meta\s[^>]*?content\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*?name\s*=\s*["']description["']"#,
    )
    .unwrap()
});
static META_OG_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<meta\s[^>]*?property\s*=\s*["']og:description["'][^>]*?content\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
    )
    .unwrap()
});
static DESCRIPTION_P: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<p\s[^>]*?class\s*=\s*["'][^"']*?(?:description|intro|summary)[^"']*["'][^>]*>(.*?)</p>"#,
    )
    .unwrap()
});

fn description_meta(page: &Page<'_>) -> Option<String> {
    META_DESCRIPTION.captures(page.raw).and_then(|c| clean_description(quoted_value(&c)?))
}

fn description_meta_reversed(page: &Page<'_>) -> Option<String> {
    META_DESCRIPTION_REVERSED.captures(page.raw).and_then(|c| clean_description(quoted_value(&c)?))
}

fn description_og(page: &Page<'_>) -> Option<String> {
    META_OG_DESCRIPTION.captures(page.raw).and_then(|c| clean_description(quoted_value(&c)?))
}

fn description_paragraph(page: &Page<'_>) -> Option<String> {
    let caps = DESCRIPTION_P.captures(page.raw)?;
    clean_description(caps.get(1)?.as_str())
}

fn clean_description(raw: &str) -> Option<String> {
    non_empty(truncate_chars(&text_of(raw), DESCRIPTION_MAX_CHARS))
}

/// Attribute value from a `(?:"(..)"|'(..)')` pair of groups.
fn quoted_value<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/* ---------- coordinates ---------- */

// `"lat": 44.1`, `lat=44.1`, `data-lat="44.1"`, `latitude: '44.1'`
static LATITUDE: Lazy<Regex> = Lazy::new(|| label_number(r"lat(?:itude)?"));
static LONGITUDE_FULL: Lazy<Regex> = Lazy::new(|| label_number("longitude"));
static LONGITUDE_LNG: Lazy<Regex> = Lazy::new(|| label_number("lng"));
static LONGITUDE_LONG: Lazy<Regex> = Lazy::new(|| label_number("long"));
static LONGITUDE_LON: Lazy<Regex> = Lazy::new(|| label_number("lon"));

fn label_number(label: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)\b{label}["']?\s*[:=]\s*["']?(-?\d{{1,3}}(?:\.\d+)?)"#
    ))
    .unwrap()
}

fn coordinates_labeled(page: &Page<'_>) -> Option<Coordinates> {
    let lat = capture_f64(&LATITUDE, page.raw).filter(|v| (-90.0..=90.0).contains(v))?;
    let lng = first_match(page, LONGITUDE).filter(|v| (-180.0..=180.0).contains(v))?;
    Some(Coordinates { lat, lng })
}

fn lng_longitude(page: &Page<'_>) -> Option<f64> { capture_f64(&LONGITUDE_FULL, page.raw) }
fn lng_lng(page: &Page<'_>) -> Option<f64> { capture_f64(&LONGITUDE_LNG, page.raw) }
fn lng_long(page: &Page<'_>) -> Option<f64> { capture_f64(&LONGITUDE_LONG, page.raw) }
fn lng_lon(page: &Page<'_>) -> Option<f64> { capture_f64(&LONGITUDE_LON, page.raw) }

/* ---------- rating ---------- */

static RATING_STARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([0-5](?:\.\d+)?)\s*(?:stars?|out\s+of\s+5)\b").unwrap()
});
static RATING_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\brating\s*:\s*([0-5](?:\.\d+)?)").unwrap()
});

fn rating_stars(page: &Page<'_>) -> Option<f64> {
    capture_f64(&RATING_STARS, &page.text).filter(|v| (0.0..=5.0).contains(v))
}

fn rating_labeled(page: &Page<'_>) -> Option<f64> {
    capture_f64(&RATING_LABEL, &page.text).filter(|v| (0.0..=5.0).contains(v))
}

/* ---------- cities ---------- */

// Capitalized place names; lowercase connecting words end a name.
static CITIES_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[Ff]rom|[Bb]etween)\s+([A-Z][A-Za-z.'-]*(?:\s+[A-Z][A-Za-z.'-]*)*)\s+(?:to|and)\s+([A-Z][A-Za-z.'-]*(?:\s+[A-Z][A-Za-z.'-]*)*)",
    )
    .unwrap()
});

fn cities_phrase(page: &Page<'_>) -> Option<String> {
    let caps = CITIES_PHRASE.captures(&page.text)?;
    let from = place_name(&caps[1]);
    let to = place_name(&caps[2]);
    Some(format!("{from} to {to}"))
}

/// Longest abbreviation (`St.`, `Mt.`, `Ft.`) whose period does not end a sentence.
const ABBREVIATION_MAX: usize = 3;

/// Cut a captured name at the first sentence break: "Wellfleet. Along" → "Wellfleet".
fn place_name(captured: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    for word in captured.split_whitespace() {
        words.push(word);
        if let Some(stem) = word.strip_suffix('.') {
            if stem.chars().count() > ABBREVIATION_MAX {
                break;
            }
        }
    }
    words.join(" ").trim_end_matches('.').to_string()
}

/* ---------- helpers ---------- */

fn capture_f64(re: &Regex, haystack: &str) -> Option<f64> {
    let caps = re.captures(haystack)?;
    caps.get(1)?.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}
