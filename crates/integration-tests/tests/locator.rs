//! Integration tests for the public dealer locator.
//!
//! The locator requires no access key. ZIP resolution goes through the
//! stub geocoder, so these tests never touch the real zippopotam.us API.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use ironwood_integration_tests::spawn_portal;

async fn search(base_url: &str, query: &str) -> (StatusCode, Value) {
    let resp = Client::new()
        .get(format!("{base_url}/dealers/search?{query}"))
        .send()
        .await
        .expect("request failed");
    let status = resp.status();
    let body = resp.json().await.expect("body was not JSON");
    (status, body)
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_returns_five_nearest_by_default() {
    let portal = spawn_portal().await;
    let (status, body) = search(&portal.base_url, "zip=77377").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zip"], "77377");

    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 5);

    // The Tomball dealer sits on the origin; Houston is next.
    assert_eq!(results[0]["id"], "d1");
    assert_eq!(results[0]["distanceMiles"], 0);
    assert_eq!(results[1]["id"], "d2");

    // Distances never decrease down the list.
    let distances: Vec<u64> = results
        .iter()
        .map(|r| r["distanceMiles"].as_u64().expect("distance"))
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_search_respects_limit() {
    let portal = spawn_portal().await;

    let (status, body) = search(&portal.base_url, "zip=77377&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["id"], "d1");

    // A limit past the directory size returns the whole directory.
    let (_, body) = search(&portal.base_url, "zip=77377&limit=50").await;
    assert_eq!(body["results"].as_array().expect("results").len(), 8);
}

#[tokio::test]
async fn test_search_ranks_from_a_distant_origin() {
    let portal = spawn_portal().await;
    let (status, body) = search(&portal.base_url, "zip=10001").await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results");

    // Lynnfield MA is the only dealer within a few hundred miles of
    // Manhattan; everything else is half a continent away.
    assert_eq!(results[0]["id"], "d7");
    let first = results[0]["distanceMiles"].as_u64().expect("distance");
    let second = results[1]["distanceMiles"].as_u64().expect("distance");
    assert!(first < 250, "Lynnfield should be close: {first}");
    assert!(second > 800, "next dealer should be far: {second}");
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_malformed_zips_are_rejected() {
    let portal = spawn_portal().await;

    for query in ["zip=", "zip=1234", "zip=123456", "zip=77a77"] {
        let (status, body) = search(&portal.base_url, query).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");
        assert_eq!(body["kind"], "invalid_input");
    }
}

#[tokio::test]
async fn test_unknown_zip_reads_as_not_found() {
    let portal = spawn_portal().await;
    let (status, body) = search(&portal.base_url, "zip=99999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["error"], "No location found for that ZIP code");
}

#[tokio::test]
async fn test_slow_geocoder_reads_exactly_like_unknown_zip() {
    let portal = spawn_portal().await;

    // 00000 makes the stub stall past the client timeout.
    let (slow_status, slow_body) = search(&portal.base_url, "zip=00000").await;
    let (missing_status, missing_body) = search(&portal.base_url, "zip=99999").await;

    assert_eq!(slow_status, StatusCode::NOT_FOUND);
    assert_eq!(slow_status, missing_status);
    assert_eq!(slow_body, missing_body);
}
