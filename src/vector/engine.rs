use super::dto::{Document, UpsertVector};
use super::implementation::PineconeIndex;
use crate::error::{PoolAgentError, Result};
use crate::llm::Embedder;
use async_trait::async_trait;
use std::sync::Arc;

const EMBED_BATCH: usize = 100;

/// Answers a free-text question from previously indexed documents.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Stores `documents` for later queries. Returns how many were written.
    async fn index(&self, documents: &[Document]) -> Result<usize>;

    async fn query(&self, question: &str) -> Result<String>;
}

/// Embeds the question and returns the text of the nearest stored documents.
pub struct VectorQueryEngine {
    embedder: Arc<dyn Embedder>,
    index: PineconeIndex,
    top_k: usize,
}

impl VectorQueryEngine {
    pub fn new(embedder: Arc<dyn Embedder>, index: PineconeIndex, top_k: usize) -> Self {
        Self {
            embedder,
            index,
            top_k: top_k.max(1),
        }
    }
}

#[async_trait]
impl QueryEngine for VectorQueryEngine {
    async fn index(&self, documents: &[Document]) -> Result<usize> {
        let mut written = 0;
        for batch in documents.chunks(EMBED_BATCH) {
            let texts: Vec<String> = batch.iter().map(|d| d.text.clone()).collect();
            let embeddings = self.embedder.embed_batch(&texts).await?;
            if embeddings.len() != batch.len() {
                return Err(PoolAgentError::internal(format!(
                    "embedder returned {} vectors for {} documents",
                    embeddings.len(),
                    batch.len()
                )));
            }

            let vectors: Vec<UpsertVector> = batch
                .iter()
                .zip(embeddings)
                .map(|(doc, values)| {
                    let mut metadata = doc.metadata.clone();
                    metadata.insert("text".to_string(), doc.text.clone().into());
                    UpsertVector {
                        id: doc.id.clone(),
                        values,
                        metadata,
                    }
                })
                .collect();
            written += self.index.upsert(&vectors).await?;
        }
        tracing::info!(documents = documents.len(), written, "Indexed documents");
        Ok(written)
    }

    async fn query(&self, question: &str) -> Result<String> {
        let vector = self.embedder.embed(question).await?;
        let matches = self.index.query(&vector, self.top_k).await?;
        tracing::debug!(matches = matches.len(), "Vector query finished");

        let passages: Vec<String> = matches.iter().filter_map(|m| m.text()).collect();
        if passages.is_empty() {
            return Ok(format!("No indexed pool data matched: {}", question));
        }
        Ok(passages.join("\n\n"))
    }
}
