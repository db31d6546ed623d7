use super::dto::{GraphqlRequest, GraphqlResponse};
use super::queries::{POOL_STATS_QUERY, RECENT_POOLS_PAGE, RECENT_POOLS_QUERY, TOP_POOLS_QUERY};
use super::retry::{retry_with_backoff, RetryPolicy};
use crate::config::SubgraphConfig;
use crate::error::{PoolAgentError, Result};
use serde_json::{json, Value};
use std::time::Duration;

/// Handle on the subgraph gateway, built once and shared by the agents.
#[derive(Clone)]
pub struct SubgraphClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl SubgraphClient {
    pub fn new(config: &SubgraphConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Pool-Agents/0.1.0")
            .build()?;
        Ok(Self {
            http,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
            retry: RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.initial_delay_ms),
            ),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// POSTs one GraphQL document, retrying transport failures with backoff.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<GraphqlResponse> {
        let body = GraphqlRequest { query, variables };
        let body = &body;
        retry_with_backoff(self.retry, |attempt| async move {
            tracing::debug!(attempt, url = %self.url, "Sending subgraph request");
            self.http
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(body)
                .send()
                .await?
                .error_for_status()?
                .json::<GraphqlResponse>()
                .await
        })
        .await
        .map_err(PoolAgentError::NetworkError)
    }

    /// Fetches up to 1000 pools ordered by descending USD volume.
    ///
    /// `user_input` is only logged; the query has no free-text filter.
    pub async fn fetch_pools(&self, user_input: &str) -> Result<GraphqlResponse> {
        tracing::info!(input = user_input, "Fetching pools from subgraph");
        let variables = json!({
            "first": RECENT_POOLS_PAGE,
            "orderBy": "volumeUSD",
            "orderDirection": "desc"
        });
        self.execute(RECENT_POOLS_QUERY, variables).await
    }

    pub async fn pool_by_id(&self, pool_id: &str) -> Result<GraphqlResponse> {
        self.execute(POOL_STATS_QUERY, json!({ "poolId": pool_id }))
            .await
    }

    pub async fn top_pools(&self, limit: u32) -> Result<GraphqlResponse> {
        self.execute(TOP_POOLS_QUERY, json!({ "limit": limit })).await
    }
}
