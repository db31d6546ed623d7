use crate::upload::{FileMetadata, FileService, FileUploadRequest};
use anyhow::Result;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

pub const UPLOAD_ROUTE: &str = "/api/chat/upload";
pub const UPLOAD_ERROR_DETAIL: &str = "Error processing file";

// base64 inflates payloads by a third
const MAX_UPLOAD_BODY: usize = 64 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub files: Arc<dyn FileService>,
}

impl AppState {
    pub fn new(files: Arc<dyn FileService>) -> Self {
        Self { files }
    }
}

/// Any file-service failure. The cause is logged, never returned.
#[derive(Debug)]
pub struct UploadFailure;

impl IntoResponse for UploadFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": UPLOAD_ERROR_DETAIL })),
        )
            .into_response()
    }
}

async fn upload_file(
    State(state): State<AppState>,
    Json(req): Json<FileUploadRequest>,
) -> std::result::Result<Json<FileMetadata>, UploadFailure> {
    tracing::info!("Processing file: {}", req.filename);
    match state
        .files
        .process_file(&req.filename, &req.base64, req.params.as_ref())
        .await
    {
        Ok(meta) => Ok(Json(meta)),
        Err(e) => {
            tracing::error!("Error processing file: {}", e);
            Err(UploadFailure)
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(UPLOAD_ROUTE, post(upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY))
        .with_state(state)
}

pub async fn run_http_server(state: AppState, port: u16) -> Result<()> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting upload server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
