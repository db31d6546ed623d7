use super::dto::{
    ChatMessage, ChatRequest, ChatResponse, EmbeddingInput, EmbeddingRequest, EmbeddingResponse,
    ToolDefinition,
};
use super::model::{ChatModel, Embedder};
use crate::config::LlmConfig;
use crate::error::{PoolAgentError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// OpenAI-compatible chat completions and embeddings client.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    embedding_model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                PoolAgentError::config_error("OPENAI_API_KEY not found in environment variables")
            })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("Pool-Agents/0.1.0")
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            embedding_model: config.embedding_model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(PoolAgentError::api_error(format!(
                "Model request to {} failed: {}: {}",
                path, status, text
            )));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<ChatMessage> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            tools: (!tools.is_empty()).then_some(tools),
            temperature: self.temperature,
        };
        let response: ChatResponse = self.post("chat/completions", &request).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Chat completion usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PoolAgentError::api_error("Model returned no choices"))?;
        match choice.finish_reason.as_deref() {
            None | Some("stop") | Some("tool_calls") => {}
            Some(other) => tracing::warn!("Unexpected finish reason: {}", other),
        }
        Ok(choice.message)
    }
}

#[async_trait]
impl Embedder for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: EmbeddingInput::One(text),
        };
        let response: EmbeddingResponse = self.post("embeddings", &request).await?;
        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| PoolAgentError::api_error("Embedding response had no data"))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: EmbeddingInput::Many(texts),
        };
        let mut response: EmbeddingResponse = self.post("embeddings", &request).await?;
        if response.data.len() != texts.len() {
            return Err(PoolAgentError::api_error(format!(
                "Embedding response had {} vectors for {} inputs",
                response.data.len(),
                texts.len()
            )));
        }
        response.data.sort_by_key(|d| d.index);
        Ok(response.data.into_iter().map(|d| d.embedding).collect())
    }
}
