use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct IndexDescription {
    pub name: String,
    pub host: String,
    #[serde(default)]
    pub dimension: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest<'a> {
    pub vector: &'a [f32],
    pub top_k: usize,
    pub include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'a str>,
}

/// A text record to embed and store under `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub metadata: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpsertVector {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct UpsertRequest<'a> {
    pub vectors: &'a [UpsertVector],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResponse {
    #[serde(default)]
    pub upserted_count: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl Match {
    /// Stored document text: a plain `text` field, or the `text` inside a
    /// JSON-encoded `_node_content` field.
    pub fn text(&self) -> Option<String> {
        let metadata = self.metadata.as_ref()?;
        if let Some(text) = metadata.get("text").and_then(Value::as_str) {
            return Some(text.to_string());
        }
        let node = metadata.get("_node_content").and_then(Value::as_str)?;
        let node: Value = serde_json::from_str(node).ok()?;
        node.get("text").and_then(Value::as_str).map(str::to_string)
    }
}
