use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pool_agents::http::{router, AppState, UPLOAD_ROUTE};
use pool_agents::upload::{FileMetadata, FileService, PrivateFileService};
use pool_agents::{PoolAgentError, Result};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct FailingService;

#[async_trait]
impl FileService for FailingService {
    async fn process_file(
        &self,
        _filename: &str,
        _base64: &str,
        _params: Option<&Value>,
    ) -> Result<FileMetadata> {
        Err(PoolAgentError::upload_error("disk full at /secret/path"))
    }
}

fn upload_request(body: Value) -> Request<Body> {
    Request::post(UPLOAD_ROUTE)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn stores_upload_and_returns_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let service = PrivateFileService::new(dir.path(), "/api/files/output/uploaded");
    let app = router(AppState::new(Arc::new(service)));

    let resp = app
        .oneshot(upload_request(json!({
            "base64": "data:text/plain;base64,SGVsbG8sIHBvb2xzIQ==",
            "filename": "pool notes.txt",
            "params": { "chat_id": "abc" }
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let meta: FileMetadata = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(meta.size, 13);
    assert_eq!(meta.file_type, "txt");
    assert!(meta.name.starts_with("pool_notes_"));
    assert!(meta.name.ends_with(".txt"));
    assert_eq!(meta.url, format!("/api/files/output/uploaded/{}", meta.name));

    let stored = std::fs::read(dir.path().join(&meta.name)).unwrap();
    assert_eq!(stored, b"Hello, pools!");
}

#[tokio::test]
async fn invalid_base64_is_a_generic_500() {
    let dir = tempfile::tempdir().unwrap();
    let service = PrivateFileService::new(dir.path(), "/files");
    let app = router(AppState::new(Arc::new(service)));

    let resp = app
        .oneshot(upload_request(json!({
            "base64": "***not base64***",
            "filename": "report.pdf"
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, json!({ "detail": "Error processing file" }));
}

#[tokio::test]
async fn service_failure_hides_cause() {
    let app = router(AppState::new(Arc::new(FailingService)));

    let resp = app
        .oneshot(upload_request(json!({
            "base64": "SGVsbG8=",
            "filename": "a.txt"
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["detail"], "Error processing file");
    assert!(!body.to_string().contains("/secret/path"));
}

#[tokio::test]
async fn only_post_is_routed() {
    let app = router(AppState::new(Arc::new(FailingService)));

    let resp = app
        .oneshot(Request::get(UPLOAD_ROUTE).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
