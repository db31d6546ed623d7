use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct FileUploadRequest {
    pub base64: String,
    pub filename: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Metadata of a stored upload, returned to the chat UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    pub url: String,
    #[serde(default)]
    pub refs: Option<Vec<String>>,
}
