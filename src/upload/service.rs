use super::dto::FileMetadata;
use crate::config::ServerConfig;
use crate::error::{PoolAgentError, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Owner of uploaded files. The HTTP layer only hands requests over.
#[async_trait]
pub trait FileService: Send + Sync {
    async fn process_file(
        &self,
        filename: &str,
        base64: &str,
        params: Option<&Value>,
    ) -> Result<FileMetadata>;
}

/// Stores uploads under a private directory as `<stem>_<uuid>.<ext>`.
#[derive(Debug, Clone)]
pub struct PrivateFileService {
    upload_dir: PathBuf,
    url_prefix: String,
}

impl PrivateFileService {
    pub fn new(upload_dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(&config.upload_dir, &config.file_url_prefix)
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[async_trait]
impl FileService for PrivateFileService {
    async fn process_file(
        &self,
        filename: &str,
        base64: &str,
        params: Option<&Value>,
    ) -> Result<FileMetadata> {
        let name = Path::new(filename.trim())
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| PoolAgentError::upload_error("filename is required"))?;

        let (mime, payload) = split_data_url(base64);
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| PoolAgentError::upload_error(format!("invalid base64 content: {}", e)))?;

        let path = Path::new(name);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(sanitize)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PoolAgentError::upload_error(format!("invalid filename: {}", name)))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .or_else(|| mime.and_then(extension_for_mime).map(str::to_string))
            .unwrap_or_else(|| "bin".to_string());

        let id = uuid::Uuid::new_v4().to_string();
        let stored_name = format!("{}_{}.{}", stem, id, extension);

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        tokio::fs::write(self.upload_dir.join(&stored_name), &bytes).await?;
        tracing::info!(
            file = %stored_name,
            size = bytes.len(),
            params = ?params,
            "Stored uploaded file"
        );

        Ok(FileMetadata {
            id,
            name: stored_name.clone(),
            size: bytes.len() as u64,
            file_type: extension,
            url: format!("{}/{}", self.url_prefix.trim_end_matches('/'), stored_name),
            refs: None,
        })
    }
}

/// Splits `data:<mime>;base64,<payload>`; plain base64 passes through.
fn split_data_url(input: &str) -> (Option<&str>, &str) {
    let input = input.trim();
    match input.strip_prefix("data:").and_then(|rest| rest.split_once(',')) {
        Some((header, payload)) => {
            let mime = header.split(';').next().filter(|m| !m.is_empty());
            (mime, payload)
        }
        None => (None, input),
    }
}

fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "application/pdf" => Some("pdf"),
        "text/plain" => Some("txt"),
        "text/csv" => Some("csv"),
        "text/markdown" => Some("md"),
        "application/json" => Some("json"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Some("docx"),
        _ => None,
    }
}

fn sanitize(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
