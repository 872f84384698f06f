//! Router-level tests for the dispatch endpoint
//!
//! Exercises the hosted fallback path end to end through the axum
//! router, without binding a socket.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use async_trait::async_trait;
use dispatch_server::{AppState, DemoBackend, PrintBackend, PrintOutcome, router};
use shared::{AppError, AppResult};
use till_render::TicketRenderer;

fn demo_router() -> Router {
    let state = AppState::new(Arc::new(DemoBackend), TicketRenderer::default());
    router(state)
}

fn dispatch_body() -> Value {
    json!({
        "order": { "id": 1, "number": "A-100" },
        "items": [
            { "name": "Tea",  "quantity": 2, "unit_price": 10000, "line_total": 20000 },
            { "name": "Cake", "quantity": 1, "unit_price": 50000, "line_total": 50000 }
        ],
        "printer_name": "Front desk"
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn post_invoice_returns_demo_acknowledgment() {
    let response = demo_router()
        .oneshot(post_json("/api/print/invoice", &dispatch_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["demo"], true);
    assert_eq!(body["printer"], "Front desk");
    let content = body["content"].as_str().unwrap();
    assert!(content.contains("INVOICE"));
    assert!(content.contains("70000"));
}

#[tokio::test]
async fn kitchen_dispatch_content_has_no_prices() {
    let response = demo_router()
        .oneshot(post_json("/api/print/kitchen", &dispatch_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["demo"], true);
    let content = body["content"].as_str().unwrap();
    assert!(content.contains("Tea x2"));
    assert!(content.contains("Cake x1"));
    for token in ["10000", "50000", "70000", "TOTAL"] {
        assert!(!content.contains(token), "kitchen ticket leaked {:?}", token);
    }
}

#[tokio::test]
async fn get_on_dispatch_route_returns_structured_405() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/print/invoice")
        .body(Body::empty())
        .unwrap();
    let response = demo_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn unknown_template_returns_404() {
    let response = demo_router()
        .oneshot(post_json("/api/print/label", &dispatch_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn malformed_items_are_rejected_before_dispatch() {
    let mut body = dispatch_body();
    body["items"][0]["quantity"] = json!(-1);
    let response = demo_router()
        .oneshot(post_json("/api/print/invoice", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn template_override_is_passed_through() {
    let mut body = dispatch_body();
    body["template_content"] = json!("CUSTOM LAYOUT\n");
    let response = demo_router()
        .oneshot(post_json("/api/print/invoice", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["content"], "CUSTOM LAYOUT\n");
}

#[tokio::test]
async fn health_reports_backend_mode() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = demo_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["mode"], "demo");
}

/// Backend that always reports the printer as missing, standing in for
/// an agent whose discovery no longer lists the selection
struct UnavailableBackend;

#[async_trait]
impl PrintBackend for UnavailableBackend {
    async fn submit(
        &self,
        printer_name: &str,
        _title: &str,
        _content: &str,
    ) -> AppResult<PrintOutcome> {
        Err(AppError::PrinterUnavailable(printer_name.to_string()))
    }

    fn mode(&self) -> &'static str {
        "agent"
    }
}

#[tokio::test]
async fn unavailable_printer_surfaces_as_422() {
    let state = AppState::new(Arc::new(UnavailableBackend), TicketRenderer::default());
    let response = router(state)
        .oneshot(post_json("/api/print/invoice", &dispatch_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E7001");
}
