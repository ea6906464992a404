//! HTTP document generator exercised against an in-process stand-in service.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use permit_wizard::config::GeneratorConfig;
use permit_wizard::wizard::{
    DocumentGenerator, GenerationError, GenerationPayload, HttpDocumentGenerator, WizardSession,
    FALLBACK_FAILURE_MESSAGE,
};

#[derive(Clone, Default)]
struct Received(Arc<Mutex<Vec<Value>>>);

async fn generate_ok(State(received): State<Received>, Json(body): Json<Value>) -> Response {
    received.0.lock().expect("log poisoned").push(body);
    (
        [(header::CONTENT_TYPE, "application/pdf")],
        b"%PDF-1.7 stub".to_vec(),
    )
        .into_response()
}

async fn generate_with_detail() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "テンプレートPDFが見つかりません" })),
    )
        .into_response()
}

async fn generate_with_html() -> Response {
    (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    addr
}

fn client(addr: SocketAddr) -> HttpDocumentGenerator {
    let mut config = GeneratorConfig::new(&format!("http://{addr}/")).expect("valid base url");
    config.timeout = Duration::from_secs(5);
    HttpDocumentGenerator::new(&config).expect("client builds")
}

#[tokio::test]
async fn successful_generation_returns_bytes_and_sends_flat_payload() {
    let received = Received::default();
    let router = Router::new()
        .route("/api/generate-pdf", post(generate_ok))
        .route("/api/health", get(health))
        .with_state(received.clone());
    let addr = spawn(router).await;
    let generator = client(addr);

    assert!(generator.health().await);

    let mut session = WizardSession::default();
    session.load_sample();
    let document = session.export_with(&generator).await.expect("export succeeds");

    assert_eq!(document.bytes, b"%PDF-1.7 stub".to_vec());
    assert_eq!(document.media_type, mime::APPLICATION_PDF);
    assert_eq!(document.file_name, "古物商許可申請書一式_山田太郎.pdf");

    let bodies = received.0.lock().expect("log poisoned");
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["lastNameKanji"], "山田");
    assert_eq!(bodies[0]["officeNameKana"], "ヤマダショウテン");
    assert_eq!(bodies[0]["hasWebsite"], true);
    assert_eq!(bodies[0]["careerHistory"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn server_detail_is_surfaced() {
    let router = Router::new().route("/api/generate-pdf", post(generate_with_detail));
    let generator = client(spawn(router).await);

    let err = generator
        .render(&GenerationPayload::default())
        .await
        .expect_err("generation fails");
    match &err {
        GenerationError::Rejected { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "テンプレートPDFが見つかりません");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.user_message(), "テンプレートPDFが見つかりません");
}

#[tokio::test]
async fn unreadable_failure_body_falls_back() {
    let router = Router::new().route("/api/generate-pdf", post(generate_with_html));
    let generator = client(spawn(router).await);

    let mut session = WizardSession::default();
    session.load_sample();
    session
        .export_with(&generator)
        .await
        .expect_err("generation fails");

    assert_eq!(session.export_error(), Some(FALLBACK_FAILURE_MESSAGE));
    assert!(!session.is_exporting());
}

#[tokio::test]
async fn unreachable_service_reports_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let generator = client(addr);

    assert!(!generator.health().await);
    let err = generator
        .render(&GenerationPayload::default())
        .await
        .expect_err("nothing listening");
    assert!(matches!(err, GenerationError::Transport(_)));
    assert_eq!(err.user_message(), FALLBACK_FAILURE_MESSAGE);
}
