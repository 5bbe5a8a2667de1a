//! Integration tests for the HTTP API
//!
//! Retailer sites are wiremock servers; the API itself runs on a free local
//! port and is driven with a plain reqwest client.

use async_trait::async_trait;
use price_scout::config::{Config, RetailerEntry, ServerConfig};
use price_scout::server::{AppState, ScoutServer};
use price_scout::verifier::{VerificationResult, Verify};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Retailer names and the mock paths standing in for their sites
const SHOPS: [(&str, &str, &str); 5] = [
    ("Amazon", "/amazon", "/s?k="),
    ("eBay", "/ebay", "/sch/i.html?_nkw="),
    ("Walmart", "/walmart", "/search?q="),
    ("Best Buy", "/bestbuy", "/site/searchpage.jsp?st="),
    ("Target", "/target", "/s?searchTerm="),
];

fn local_server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Creates a config whose retailers all live on the mock server
fn create_test_config(mock_uri: &str) -> Config {
    Config {
        server: local_server_config(),
        retailers: SHOPS
            .iter()
            .map(|(name, site, search_path)| RetailerEntry {
                name: name.to_string(),
                base_url: format!("{}{}", mock_uri, site),
                search_path: search_path.to_string(),
            })
            .collect(),
        ..Config::default()
    }
}

/// Verifier that counts calls and never touches the network
#[derive(Default)]
struct CountingVerifier {
    calls: AtomicUsize,
}

#[async_trait]
impl Verify for CountingVerifier {
    async fn verify(&self, url: &str) -> VerificationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        VerificationResult::accessible(200, url)
    }
}

async fn start_counting_server() -> (ScoutServer, Arc<CountingVerifier>) {
    let counter = Arc::new(CountingVerifier::default());
    let config = Config {
        server: local_server_config(),
        ..Config::default()
    };
    let state = AppState::with_verifier(&config, counter.clone());
    let server = ScoutServer::start(&config.server, state)
        .await
        .expect("Failed to start server");
    (server, counter)
}

#[tokio::test]
async fn test_health() {
    let (server, _) = start_counting_server().await;

    let response = reqwest::get(format!("{}/health", server.base_url()))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"status": "healthy", "service": "Price Comparison Dashboard"})
    );
}

#[tokio::test]
async fn test_search_ranks_listings_and_picks_best_deal() {
    let mock_server = MockServer::start().await;

    for (_, site, _) in &SHOPS[..4] {
        Mock::given(method("HEAD"))
            .and(path(*site))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    // Target's site is down
    Mock::given(method("HEAD"))
        .and(path("/target"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let state = AppState::from_config(&config).unwrap();
    let server = ScoutServer::start(&config.server, state).await.unwrap();

    let response = reqwest::Client::new()
        .post(format!("{}/search", server.base_url()))
        .json(&json!({"query": "  wireless mouse  "}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "wireless mouse");
    assert_eq!(body["total_results"], 5);
    assert_eq!(body["verified_results"], 4);

    let results = body["results"].as_array().unwrap();
    let retailers: Vec<&str> = results
        .iter()
        .map(|r| r["retailer"].as_str().unwrap())
        .collect();
    assert_eq!(retailers, ["Amazon", "eBay", "Walmart", "Best Buy", "Target"]);

    let prices: Vec<Value> = results.iter().map(|r| r["price"].clone()).collect();
    assert_eq!(
        prices,
        [json!(99.99), json!(107.49), json!(114.99), json!(122.49), json!("N/A")]
    );

    let target = &results[4];
    assert_eq!(target["verified"], false);
    assert_eq!(target["verification_status"], "Link returned status code 404");
    assert_eq!(
        target["url"],
        format!("{}/target/s?searchTerm=wireless+mouse", mock_server.uri())
    );

    let best = &body["best_deal"];
    assert_eq!(best["retailer"], "Amazon");
    assert_eq!(best["price"], json!(99.99));
    assert_eq!(best["currency"], "USD");
    assert_eq!(best["product_name"], "wireless mouse - Amazon listing");
}

#[tokio::test]
async fn test_search_with_nothing_reachable_has_null_best_deal() {
    // No mocks mounted: every HEAD gets wiremock's default 404
    let mock_server = MockServer::start().await;

    let config = create_test_config(&mock_server.uri());
    let state = AppState::from_config(&config).unwrap();
    let server = ScoutServer::start(&config.server, state).await.unwrap();

    let body: Value = reqwest::Client::new()
        .post(format!("{}/search", server.base_url()))
        .json(&json!({"query": "laptop"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_results"], 5);
    assert_eq!(body["verified_results"], 0);
    assert!(body["best_deal"].is_null());
}

#[tokio::test]
async fn test_empty_query_rejected_before_network() {
    let (server, counter) = start_counting_server().await;
    let client = reqwest::Client::new();

    for payload in [json!({"query": "   "}), json!({"query": ""}), json!({}), json!({"query": null})] {
        let response = client
            .post(format!("{}/search", server.base_url()))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Please enter a search query");
    }

    assert_eq!(counter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_search_calls_verifier_once_per_retailer() {
    let (server, counter) = start_counting_server().await;

    let response = reqwest::Client::new()
        .post(format!("{}/search", server.base_url()))
        .json(&json!({"query": "headphones"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(counter.calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_verify_link() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let state = AppState::from_config(&config).unwrap();
    let server = ScoutServer::start(&config.server, state).await.unwrap();

    let url = format!("{}/page", mock_server.uri());
    let response = reqwest::Client::new()
        .post(format!("{}/verify-link", server.base_url()))
        .json(&json!({ "url": format!(" {} ", url) }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["url"], url);
    assert_eq!(
        body["verification"],
        json!({
            "valid": true,
            "status_code": 200,
            "message": "Link is valid and accessible",
            "final_url": url,
        })
    );
}

#[tokio::test]
async fn test_empty_url_rejected_before_network() {
    let (server, counter) = start_counting_server().await;

    let response = reqwest::Client::new()
        .post(format!("{}/verify-link", server.base_url()))
        .json(&json!({"url": "  "}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Please provide a URL to verify");
    assert_eq!(counter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (server, counter) = start_counting_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/search", server.base_url()))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    // Missing content type is rejected the same way
    let response = client
        .post(format!("{}/verify-link", server.base_url()))
        .body(r#"{"url": "https://example.com"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(counter.calls.load(Ordering::SeqCst), 0);
}
