//! Integration tests for the APM demo API.
//!
//! These drive the full router (middleware included) in-process.
//! Run with: cargo test --test integration

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use apm_demo_api::api::{create_router, AppState};
use apm_demo_api::simulation::{base_services, Identity};

fn test_app() -> Router {
    create_router(AppState::new(Identity {
        name: "integration".to_string(),
        version: "0.0.1".to_string(),
    }))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, header::HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

async fn get(uri: &str) -> (StatusCode, header::HeaderMap, Value) {
    send(
        test_app(),
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// Field names of a JSON object, sorted.
fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

#[tokio::test]
async fn system_returns_json_object_with_status() {
    let (status, headers, body) = get("/api/system").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert!(body["status"].is_string());
    assert_eq!(body["name"], "integration");
    assert_eq!(body["version"], "0.0.1");
    assert_eq!(
        keys(&body),
        [
            "cpu_percent",
            "disk_percent",
            "mem_percent",
            "name",
            "status",
            "ts",
            "uptime_human",
            "version"
        ]
    );
}

#[tokio::test]
async fn services_returns_the_catalog() {
    let (status, _, body) = get("/api/services").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(base_services()).unwrap());

    let first = &body[0];
    assert_eq!(first["id"], "svc-auth");
    assert_eq!(first["type"], "app");
    assert_eq!(first["targets"]["target_latency_ms"], 220);
}

#[tokio::test]
async fn repeated_requests_are_structurally_identical() {
    for uri in [
        "/api/system",
        "/api/services",
        "/api/app",
        "/api/network",
        "/api/cloud",
        "/api/services/svc-redis/metrics",
    ] {
        let (_, _, first) = get(uri).await;
        let (_, _, second) = get(uri).await;

        if first.is_object() {
            assert_eq!(keys(&first), keys(&second), "{uri}");
        } else {
            assert_eq!(first, second, "{uri}");
        }
    }
}

#[tokio::test]
async fn every_panel_reports_a_status() {
    for uri in [
        "/api/app",
        "/api/network",
        "/api/cloud",
        "/api/security",
        "/api/services/svc-postgres/metrics",
    ] {
        let (status, _, body) = get(uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        let value = body["status"].as_str().unwrap();
        assert!(["ok", "warn", "down"].contains(&value), "{uri}: {value}");
        assert!(body["ts"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn security_feed_lists_events() {
    let (status, _, body) = get("/api/security").await;

    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert!((2..=4).contains(&events.len()));
    for event in events {
        assert_eq!(event["source"], "backend");
        assert!(event["severity"].is_string());
    }
}

#[tokio::test]
async fn undefined_paths_return_404() {
    for uri in ["/", "/api", "/api/unknown", "/api/services/svc-auth"] {
        let (status, _, body) = get(uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["detail"], "Not Found", "{uri}");
    }
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/system")
        .header(header::ORIGIN, "https://dashboard.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn simple_requests_carry_cors_header() {
    let request = Request::builder()
        .uri("/api/services")
        .header(header::ORIGIN, "https://dashboard.example")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, _, body) = get("/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "integration");
    assert_eq!(body["info"]["version"], "0.0.1");
    assert!(body["paths"]["/api/system"]["get"].is_object());
    assert!(body["paths"]["/api/services/{service_id}/metrics"]["get"].is_object());
}
