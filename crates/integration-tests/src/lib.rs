//! Integration tests for the Ironwood dealer platform.
//!
//! Each test spawns the portal on an ephemeral port with the mock
//! operations backend and a stub ZIP geocoder behind it, then drives it
//! over HTTP exactly as the dealer frontend would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ironwood-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `locator` - Public dealer locator tests
//! - `gateway_orders` - Order surface tests
//! - `gateway_warranty` - Warranty and support ticket tests
//! - `gateway_account` - Auth, profile, leads, inventory, notices

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use secrecy::SecretString;
use serde_json::json;

use ironwood_portal::config::{BackendMode, GeocoderConfig, PortalConfig};
use ironwood_portal::state::AppState;

/// Access key every spawned portal accepts.
pub const TEST_ACCESS_KEY: &str = "k9PzQ4vXw2Lr8NtB5mJcD7hYfG3sWqEa";

/// Handle to a portal spawned on an ephemeral port.
pub struct TestPortal {
    pub base_url: String,
}

/// Spawn the portal with a stub geocoder behind it.
pub async fn spawn_portal() -> TestPortal {
    let geocoder = spawn_stub_geocoder().await;
    spawn_portal_with_geocoder(&geocoder).await
}

/// Spawn the portal against a specific geocoder base URL.
pub async fn spawn_portal_with_geocoder(geocoder_base_url: &str) -> TestPortal {
    let config = PortalConfig {
        host: Ipv4Addr::LOCALHOST.into(),
        port: 0,
        backend: BackendMode::Mock,
        geocoder: GeocoderConfig {
            base_url: geocoder_base_url.to_string(),
            timeout: Duration::from_secs(2),
        },
        access_key: SecretString::from(TEST_ACCESS_KEY),
        sentry_dsn: None,
        sentry_environment: None,
    };

    let state = AppState::new(config).expect("Failed to build portal state");
    let app = ironwood_portal::app(state);

    let listener = tokio::net::TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("Failed to bind portal listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("portal server error");
    });

    TestPortal {
        base_url: format!("http://{addr}"),
    }
}

/// Spawn a stub of the zippopotam.us API on an ephemeral port.
///
/// Knows a handful of ZIP codes, 404s everything else, and answers
/// `00000` slowly enough to trip the portal's client timeout.
pub async fn spawn_stub_geocoder() -> String {
    let app = Router::new().route("/us/{zip}", get(lookup));

    let listener = tokio::net::TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("Failed to bind geocoder listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("stub geocoder error");
    });

    format!("http://{addr}")
}

async fn lookup(Path(zip): Path<String>) -> Response {
    if zip == "00000" {
        tokio::time::sleep(Duration::from_secs(5)).await;
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let place = match zip.as_str() {
        "77377" => Some(("Tomball", "Texas", "30.0972", "-95.6161")),
        "77092" => Some(("Houston", "Texas", "29.8168", "-95.4949")),
        "55408" => Some(("Minneapolis", "Minnesota", "44.9487", "-93.2879")),
        "01940" => Some(("Lynnfield", "Massachusetts", "42.5385", "-71.0408")),
        "10001" => Some(("New York", "New York", "40.7506", "-73.9971")),
        _ => None,
    };

    match place {
        Some((name, state, lat, lng)) => Json(json!({
            "post code": zip,
            "country": "United States",
            "country abbreviation": "US",
            "places": [{
                "place name": name,
                "state": state,
                "latitude": lat,
                "longitude": lng,
            }]
        }))
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
