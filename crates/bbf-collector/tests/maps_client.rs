//! Integration tests for `Collector` against a wiremock search API.

use bbf_collector::{Collector, CollectorConfig, CollectorError, MapsClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn live_collector(server: &MockServer) -> Collector {
    Collector::new(CollectorConfig {
        api_key: Some("test-key".to_string()),
        base_url: format!("{}/search", server.uri()),
        timeout_secs: 5,
        user_agent: "bbf-test/0.1".to_string(),
        request_delay_ms: 0,
    })
    .expect("collector construction should not fail")
}

fn listing(n: usize) -> serde_json::Value {
    json!({
        "title": format!("Listing {n}"),
        "place_id": format!("place_{n}"),
        "type": "Pressure washing service",
        "address": format!("{n} Main St, Austin, TX 78701"),
        "rating": 4.1,
        "reviews": 10 + n
    })
}

fn page(range: std::ops::Range<usize>) -> serde_json::Value {
    json!({ "local_results": range.map(listing).collect::<Vec<_>>() })
}

#[tokio::test]
async fn search_follows_pages_until_short_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("engine", "google_maps"))
        .and(query_param("q", "pressure washing in Austin, TX"))
        .and(query_param("type", "search"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0..20)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(20..23)))
        .expect(1)
        .mount(&server)
        .await;

    let mut collector = live_collector(&server);
    assert!(!collector.is_demo());
    let businesses = collector
        .search("pressure washing", "Austin, TX", 100)
        .await;

    assert_eq!(businesses.len(), 23);
    assert_eq!(businesses[0].place_id, "place_0");
    assert_eq!(businesses[22].place_id, "place_22");
    assert_eq!(businesses[5].city, "Austin");
    assert_eq!(businesses[5].zip_code.as_deref(), Some("78701"));
}

#[tokio::test]
async fn search_stops_once_max_results_reached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0..20)))
        .expect(1)
        .mount(&server)
        .await;

    let mut collector = live_collector(&server);
    let businesses = collector.search("lawn care", "Boise, ID", 10).await;
    assert_eq!(businesses.len(), 10);
}

#[tokio::test]
async fn transport_failure_returns_partial_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0..20)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("start", "20"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut collector = live_collector(&server);
    let businesses = collector.search("tree service", "Mobile, AL", 60).await;
    assert_eq!(businesses.len(), 20);
}

#[tokio::test]
async fn api_error_in_body_yields_empty_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Invalid API key."})),
        )
        .mount(&server)
        .await;

    let mut collector = live_collector(&server);
    let businesses = collector.search("locksmith", "Reno, NV", 20).await;
    assert!(businesses.is_empty());
}

#[tokio::test]
async fn malformed_listing_is_skipped() {
    let server = MockServer::start().await;

    let body = json!({
        "local_results": [
            listing(1),
            {"title": "Broken", "rating": "five stars"},
            listing(2)
        ]
    });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let mut collector = live_collector(&server);
    let businesses = collector.search("pool service", "Tampa, FL", 20).await;
    let ids: Vec<_> = businesses.iter().map(|b| b.place_id.as_str()).collect();
    assert_eq!(ids, ["place_1", "place_2"]);
}

#[tokio::test]
async fn repeated_search_hits_the_api_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0..4)))
        .expect(1)
        .mount(&server)
        .await;

    let mut collector = live_collector(&server);
    let first = collector.search("junk removal", "Ogden, UT", 20).await;
    let second = collector.search("junk removal", "Ogden, UT", 20).await;
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_reviews_maps_and_truncates() {
    let server = MockServer::start().await;

    let body = json!({
        "reviews": [
            {"rating": 1, "snippet": "They never showed up.", "user": {"name": "Ann"}, "iso_date": "2024-06-01T09:30:00Z"},
            {"rating": 4.4, "snippet": "Solid work."},
            {"rating": 5, "snippet": "Great."}
        ]
    });
    Mock::given(method("GET"))
        .and(query_param("engine", "google_maps_reviews"))
        .and(query_param("place_id", "place_7"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let collector = live_collector(&server);
    let reviews = collector.fetch_reviews("place_7", 2).await;
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].rating, 1);
    assert_eq!(reviews[0].author.as_deref(), Some("Ann"));
    assert!(reviews[0].date.is_some());
    assert_eq!(reviews[1].rating, 4);
    assert!(reviews[1].author.is_none());
}

#[tokio::test]
async fn fetch_reviews_failure_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let collector = live_collector(&server);
    assert!(collector.fetch_reviews("place_1", 10).await.is_empty());
}

#[tokio::test]
async fn unexpected_status_error_hides_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = MapsClient::with_base_url(
        "secret-key",
        5,
        "bbf-test/0.1",
        &format!("{}/search", server.uri()),
    )
    .expect("client construction should not fail");
    let err = client.search_page("x in y", 0).await.unwrap_err();
    assert!(matches!(err, CollectorError::UnexpectedStatus { status: 429, .. }));
    assert!(!err.to_string().contains("secret-key"));
}
