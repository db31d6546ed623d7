use super::dto::{
    IndexDescription, Match, QueryRequest, QueryResponse, UpsertRequest, UpsertResponse,
    UpsertVector,
};
use crate::config::VectorConfig;
use crate::error::{PoolAgentError, Result};
use std::time::Duration;

const API_VERSION: &str = "2024-07";
const UPSERT_BATCH: usize = 100;

/// Handle on one Pinecone index. The data-plane host is resolved once.
#[derive(Clone)]
pub struct PineconeIndex {
    http: reqwest::Client,
    api_key: String,
    host: String,
    namespace: Option<String>,
}

impl PineconeIndex {
    pub async fn connect(config: &VectorConfig) -> Result<Self> {
        let http = build_http()?;
        let url = format!(
            "{}/indexes/{}",
            config.control_url.trim_end_matches('/'),
            config.index_name
        );
        let description: IndexDescription = http
            .get(&url)
            .header("Api-Key", &config.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::info!(
            index = %description.name,
            host = %description.host,
            dimension = ?description.dimension,
            "Connected to vector index"
        );
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            host: normalize_host(&description.host),
            namespace: None,
        })
    }

    /// Builds a handle for an already known data-plane host.
    pub fn from_host(api_key: impl Into<String>, host: &str) -> Result<Self> {
        Ok(Self {
            http: build_http()?,
            api_key: api_key.into(),
            host: normalize_host(host),
            namespace: None,
        })
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<Match>> {
        if vector.is_empty() {
            return Err(PoolAgentError::api_error("query vector is empty"));
        }
        let request = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
            namespace: self.namespace.as_deref(),
        };
        let response: QueryResponse = self
            .http
            .post(format!("{}/query", self.host))
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.matches)
    }

    /// Writes vectors in batches, replacing any stored under the same ids.
    /// Returns the number of vectors the index reports as written.
    pub async fn upsert(&self, vectors: &[UpsertVector]) -> Result<usize> {
        let mut upserted = 0;
        for batch in vectors.chunks(UPSERT_BATCH) {
            let request = UpsertRequest {
                vectors: batch,
                namespace: self.namespace.as_deref(),
            };
            let response: UpsertResponse = self
                .http
                .post(format!("{}/vectors/upsert", self.host))
                .header("Api-Key", &self.api_key)
                .header("X-Pinecone-API-Version", API_VERSION)
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            upserted += response.upserted_count;
        }
        tracing::debug!(upserted, "Upserted vectors");
        Ok(upserted)
    }
}

fn build_http() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("Pool-Agents/0.1.0")
        .build()?)
}

fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hosts_get_https() {
        assert_eq!(
            normalize_host("pools-abc.svc.pinecone.io"),
            "https://pools-abc.svc.pinecone.io"
        );
        assert_eq!(normalize_host("http://127.0.0.1:5080/"), "http://127.0.0.1:5080");
    }
}
