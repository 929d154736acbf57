// tests/common/mod.rs
#![allow(dead_code)]

use std::path::PathBuf;

use trail_scrape::config::options::ScrapeOptions;
use trail_scrape::Region;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn listing_page(slugs: &[&str]) -> String {
    let mut links = String::new();
    for slug in slugs {
        links.push_str(&format!(
            "<div class=\"card\"><a href=\"/trail/{slug}/\">{slug}</a> <a href=\"/trail/{slug}/map/\">map</a></div>\n"
        ));
    }
    format!("<html><body><h1>Trails</h1>\n{links}</body></html>")
}

pub fn trail_page(name: &str, miles: &str) -> String {
    format!(
        r#"<html><head>
<meta name="description" content="A quiet path along the river.">
</head><body>
<h1 class="title">{name}</h1>
<div class="stats"><span>{miles} mi</span> <span>Surface: <b>Crushed Stone</b></span></div>
<p>Runs from Bellows Falls to Rockingham.</p>
</body></html>"#
    )
}

pub fn nameless_page() -> String {
    "<html><body><div>Nothing to see, 3 mi</div></body></html>".to_string()
}

pub async fn serve(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock site: CT listing is missing (404), VT lists four trails of which two are usable.
pub async fn vermont_site() -> MockServer {
    let server = MockServer::start().await;
    serve(&server, &Region::VT.listing_path(), listing_page(&["west-river", "alpha", "broken", "nameless"])).await;
    serve(&server, "/trail/west-river/", trail_page("West River Trl", "16")).await;
    serve(&server, "/trail/alpha/", trail_page("Alpha Rail-Trail", "4.25")).await;
    serve(&server, "/trail/nameless/", nameless_page()).await;
    server
}

pub fn fast_options(base_url: &str, regions: Vec<Region>, out_path: PathBuf) -> ScrapeOptions {
    let mut opts = ScrapeOptions {
        base_url: base_url.to_string(),
        regions,
        out_path,
        ..ScrapeOptions::default()
    }
    .without_delays();
    opts.fetch.max_attempts = 1;
    opts
}
