// tests/fetcher.rs
use std::time::{Duration, Instant};

use trail_scrape::config::consts::USER_AGENT;
use trail_scrape::config::options::FetchOptions;
use trail_scrape::core::Fetcher;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(max_attempts: u32, retry_delay: Duration) -> Fetcher {
    Fetcher::new(&FetchOptions { max_attempts, retry_delay, ..FetchOptions::default() }).unwrap()
}

#[tokio::test]
async fn returns_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetcher(3, Duration::ZERO).fetch(&format!("{}/ok", server.uri())).await;
    assert_eq!(body.as_deref(), Some("hello"));
}

#[tokio::test]
async fn retries_after_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("second time"))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetcher(3, Duration::from_millis(10)).fetch(&format!("{}/flaky", server.uri())).await;
    assert_eq!(body.as_deref(), Some("second time"));
}

#[tokio::test]
async fn gives_up_after_max_attempts_and_waits_between_them() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let delay = Duration::from_millis(40);
    let started = Instant::now();
    let body = fetcher(3, delay).fetch(&format!("{}/down", server.uri())).await;

    assert!(body.is_none());
    assert!(started.elapsed() >= delay * 2, "elapsed {:?}", started.elapsed());
}

#[tokio::test]
async fn not_found_is_treated_like_any_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    assert!(fetcher(2, Duration::ZERO).fetch(&format!("{}/missing", server.uri())).await.is_none());
}

#[tokio::test]
async fn zero_attempts_still_tries_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(fetcher(0, Duration::ZERO).fetch(&server.uri()).await.is_some());
}

#[tokio::test]
async fn identifies_itself_with_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("ua ok"))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetcher(1, Duration::ZERO).fetch(&server.uri()).await;
    assert_eq!(body.as_deref(), Some("ua ok"));
}
