#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use address_lookup::AddressClient;
use axum::extract::{Query, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub const CITY_OR_ZIP_REQUIRED: &str = "Either City or Zip Code is required. Please review and resubmit your request.";
pub const LINE1_REQUIRED: &str = "Line1 is required. Please review and resubmit your request.";
pub const INVALID_STATE_CODE: &str = "Invalid State Code";

/// (line1, city, state code, zip) known to the stand-in service
const KNOWN_ADDRESSES: &[(&str, &str, &str, &str)] = &[
    ("1 W MAIN ST", "MEDFORD", "OR", "97501"),
    ("123 E MAIN ST", "ONTARIO", "CA", "91761"),
    ("123 N MAIN ST", "ONTARIO", "CA", "91762"),
    ("123 W MAIN ST", "ONTARIO", "CA", "91762"),
    ("14800 VIENNA CIR", "PARKER", "CO", "80134"),
];

#[derive(Clone, Copy)]
struct Behavior {
    /// the live service accepts oversized state codes with a 200
    reject_invalid_state_code: bool,
}

/// An address-validation service running on a random local port.
///
/// Besides the regular `/api/addresses` route it serves a few prefixed
/// variants used to provoke client-side failure paths:
/// `/lenient`, `/broken`, `/down`, `/slow` and `/echo`.
pub struct MockService {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockService {
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock service");
        let addr = listener.local_addr().expect("mock service address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router()).await.expect("serve mock service");
        });
        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, prefix: &str) -> String {
        format!("http://{}{}", self.addr, prefix)
    }

    pub fn client(&self) -> AddressClient {
        AddressClient::new(&self.base_url()).expect("client for mock service")
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base url nothing listens on
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{}", addr)
}

fn router() -> Router {
    let strict = Router::new()
        .route("/api/addresses", get(addresses))
        .with_state(Behavior { reject_invalid_state_code: true });
    let lenient = Router::new()
        .route("/api/addresses", get(addresses))
        .with_state(Behavior { reject_invalid_state_code: false });

    strict
        .nest("/lenient", lenient)
        .route("/broken/api/addresses", get(|| async { (StatusCode::OK, "<html>maintenance</html>") }))
        .route("/down/api/addresses", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable") }))
        .route("/slow/api/addresses", get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"count": 0, "addresses": []}))
        }))
        .route("/echo/api/addresses", get(echo))
}

async fn addresses(State(behavior): State<Behavior>, Query(params): Query<HashMap<String, String>>) -> Response {
    let param = |key: &str| params.get(key).map(|v| v.trim().to_uppercase()).filter(|v| !v.is_empty());
    let line1 = param("line1");
    let city = param("city");
    let state_code = param("stateCode");
    let zip = param("zipCodeLeading5");

    let Some(line1) = line1 else {
        return (StatusCode::BAD_REQUEST, LINE1_REQUIRED).into_response();
    };
    if city.is_none() && zip.is_none() {
        return (StatusCode::BAD_REQUEST, CITY_OR_ZIP_REQUIRED).into_response();
    }
    if behavior.reject_invalid_state_code && state_code.as_ref().is_some_and(|s| s.len() != 2) {
        return (StatusCode::BAD_REQUEST, INVALID_STATE_CODE).into_response();
    }

    let tokens = line1.split_whitespace().collect::<Vec<_>>();
    let addresses = KNOWN_ADDRESSES.iter()
        .filter(|(l1, c, s, z)| {
            let known_tokens = l1.split_whitespace().collect::<Vec<_>>();
            tokens.iter().all(|t| known_tokens.contains(t))
                && city.as_deref().map_or(true, |v| v == *c)
                && zip.as_deref().map_or(true, |v| v == *z)
                // oversized codes only reach here in lenient mode, matched on their prefix
                && state_code.as_deref().map_or(true, |v| v == *s || v.len() != 2 && v.starts_with(*s))
        })
        .map(|(l1, c, s, z)| json!({
            "line1": l1,
            "city": c,
            "stateCode": s,
            "zipCodeLeading5": z,
            "countryCode": "US",
        }))
        .collect::<Vec<Value>>();

    Json(json!({"count": addresses.len(), "addresses": addresses})).into_response()
}

async fn echo(RawQuery(query): RawQuery, headers: HeaderMap) -> Response {
    let value_of = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    Json(json!({
        "query": query,
        "accept": value_of(header::ACCEPT),
        "userAgent": value_of(header::USER_AGENT),
    })).into_response()
}
