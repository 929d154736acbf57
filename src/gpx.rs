// src/gpx.rs
//! Waypoint-only GPX files for GPS apps, one per located trail.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};

use crate::config::options::GpxOptions;
use crate::core::sanitize::{escape_xml, sanitize_filename};
use crate::dataset::Dataset;
use crate::error::ScrapeError;
use crate::file::{ensure_directory, load_dataset, resolve_unique_filename, write_dataset};
use crate::trail::{Coordinates, Trail};

const CREATOR: &str = "NE E-Bike and PEV Community";

/// GPX 1.1 document for one trail. `None` if the trail has no coordinates.
pub fn render_gpx(trail: &Trail, timestamp: DateTime<Utc>) -> Option<String> {
    let Coordinates { lat, lng } = trail.coordinates?;
    let name = escape_xml(&trail.name);
    let desc = escape_xml(&trail.description);
    let time = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);

    Some(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="{CREATOR}"
     xmlns="http://www.topografix.com/GPX/1/1"
     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
     xsi:schemaLocation="http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd">
  <metadata>
    <name>{name}</name>
    <desc>{desc}</desc>
    <author>
      <name>{CREATOR}</name>
    </author>
    <time>{time}</time>
  </metadata>
  <wpt lat="{lat}" lon="{lng}">
    <name>{name} - Trailhead</name>
    <desc>Start point for {name}</desc>
    <sym>Trailhead</sym>
  </wpt>
  <wpt lat="{lat}" lon="{lng}">
    <name>{name} - Center</name>
    <desc>{desc}</desc>
    <sym>Trail</sym>
  </wpt>
</gpx>
"#
    ))
}

/// Write one `.gpx` per located trail of `dataset` into `out_dir`, and point
/// each trail's `gpx_file` at its file (cleared for trails without one).
pub fn write_gpx_files(
    dataset: &mut Dataset,
    out_dir: &Path,
    timestamp: DateTime<Utc>,
) -> Result<Vec<PathBuf>, ScrapeError> {
    ensure_directory(out_dir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::new();

    for trail in &mut dataset.trails {
        trail.gpx_file = None;
        let Some(doc) = render_gpx(trail, timestamp) else {
            debug!(name = %trail.name, "no coordinates; skipping GPX");
            continue;
        };
        let stem_source = if trail.id.is_empty() { &trail.name } else { &trail.id };
        let stem = sanitize_filename(stem_source, "trail");
        let path = resolve_unique_filename(out_dir, &stem, &mut seen, "gpx");

        fs::write(&path, doc).map_err(|e| ScrapeError::io("writing", &path, e))?;
        trail.gpx_file = Some(gpx_reference(&path));
        written.push(path);
    }
    Ok(written)
}

// Forward slashes on every platform; the reference is read by a web front end.
fn gpx_reference(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Load the saved dataset, export it, then save it back with the GPX references.
pub fn export(opts: &GpxOptions) -> Result<Vec<PathBuf>, ScrapeError> {
    let mut dataset = load_dataset(&opts.input)?;
    let written = write_gpx_files(&mut dataset, &opts.out_dir, Utc::now())?;
    write_dataset(&opts.input, &dataset)?;
    info!(
        files = written.len(),
        trails = dataset.trails.len(),
        dir = %opts.out_dir.display(),
        "GPX export finished"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::assemble;
    use crate::region::Region;
    use chrono::{NaiveDate, TimeZone};
    use rand::{SeedableRng, rngs::StdRng};

    fn located(name: &str) -> Trail {
        let mut t = Trail::new("https://h/trail/x", Region::VT);
        t.name = name.into();
        t.length = 1.0;
        t.description = "Flat & fast".into();
        t.coordinates = Some(Coordinates { lat: 44.5, lng: -72.5 });
        t
    }

    #[test]
    fn renders_two_waypoints_with_escaped_text() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let doc = render_gpx(&located("Rock <&> Roll"), ts).unwrap();
        assert!(doc.contains("<name>Rock &lt;&amp;&gt; Roll - Trailhead</name>"));
        assert!(doc.contains("<desc>Flat &amp; fast</desc>"));
        assert!(doc.contains(r#"<wpt lat="44.5" lon="-72.5">"#));
        assert_eq!(doc.matches("<wpt ").count(), 2);
        assert!(doc.contains("<time>2026-10-18T12:00:00Z</time>"));
    }

    #[test]
    fn references_follow_written_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut stale = located("B");
        stale.id = "b".into();
        stale.coordinates = None;
        stale.gpx_file = Some("gpx/b.gpx".into());
        let mut dataset = Dataset {
            trails: vec![located("A"), stale],
            metadata: assemble(Vec::new(), &mut StdRng::seed_from_u64(0), NaiveDate::MIN).metadata,
        };

        let written = write_gpx_files(&mut dataset, dir.path(), Utc::now()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(dataset.trails[0].gpx_file.as_deref(), Some(gpx_reference(&written[0]).as_str()));
        assert!(dataset.trails[0].gpx_file.as_deref().unwrap().ends_with("/x.gpx"));
        assert_eq!(dataset.trails[1].gpx_file, None);
    }

    #[test]
    fn unlocated_trail_renders_nothing() {
        let mut t = located("A");
        t.coordinates = None;
        assert!(render_gpx(&t, Utc::now()).is_none());
    }
}
