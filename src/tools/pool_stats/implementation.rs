use super::dto::{PoolStatsInput, TopPoolsInput};
use crate::error::{PoolAgentError, Result};
use crate::subgraph::{PoolData, PoolsData, SubgraphClient};
use crate::summary::{summarize_stats, summarize_top};
use crate::tools::{invalid_arguments, unknown_tool, Tool, ToolSet};
use async_trait::async_trait;
use serde_json::{json, Value};

pub const QUERY_POOL_STATS: &str = "query_pool_stats";
pub const QUERY_TOP_POOLS: &str = "query_top_pools";
pub const MAX_TOP_POOLS: u32 = 1000;

/// Tools behind the pool-stats agent. Stateless apart from the client handle.
#[derive(Clone)]
pub struct PoolStatsTools {
    subgraph: SubgraphClient,
}

impl PoolStatsTools {
    pub fn new(subgraph: SubgraphClient) -> Self {
        Self { subgraph }
    }

    pub async fn query_pool_stats(&self, input: PoolStatsInput) -> String {
        match self.pool_stats(&input.pool_id).await {
            Ok(text) => text,
            Err(PoolAgentError::GraphqlError(errors)) => format!("Error fetching data: {}", errors),
            Err(e) => {
                tracing::error!("Error querying pool stats: {}", e);
                format!("Error querying pool stats: {}", e)
            }
        }
    }

    pub async fn query_top_pools(&self, input: TopPoolsInput) -> String {
        match self.top_pools(input.limit).await {
            Ok(text) => text,
            Err(PoolAgentError::GraphqlError(errors)) => format!("Error fetching data: {}", errors),
            Err(e) => {
                tracing::error!("Error querying top pools: {}", e);
                format!("Error querying top pools: {}", e)
            }
        }
    }

    async fn pool_stats(&self, pool_id: &str) -> Result<String> {
        let pool_id = pool_id.trim();
        if pool_id.is_empty() {
            return Err(PoolAgentError::api_error("pool_id is required"));
        }
        // subgraph ids are lowercase hex
        let data: PoolData = self
            .subgraph
            .pool_by_id(&pool_id.to_lowercase())
            .await?
            .into_data()?;
        summarize_stats(pool_id, data.pool.as_ref())
    }

    async fn top_pools(&self, limit: u32) -> Result<String> {
        if limit == 0 || limit > MAX_TOP_POOLS {
            return Err(PoolAgentError::api_error(format!(
                "limit must be 1..={}",
                MAX_TOP_POOLS
            )));
        }
        let data: PoolsData = self.subgraph.top_pools(limit).await?.into_data()?;
        summarize_top(&data.pools, limit as usize)
    }
}

#[async_trait]
impl ToolSet for PoolStatsTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: QUERY_POOL_STATS.to_string(),
                description: "Get detailed statistics for a single Uniswap pool by its ID"
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "pool_id": { "type": "string", "description": "Pool contract address" }
                    },
                    "required": ["pool_id"]
                }),
            },
            Tool {
                name: QUERY_TOP_POOLS.to_string(),
                description: "List the top Uniswap pools by USD volume".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "limit": {
                            "type": "integer",
                            "description": "Number of pools to return (default 5)"
                        }
                    }
                }),
            },
        ]
    }

    async fn call(&self, name: &str, arguments: Value) -> String {
        match name {
            QUERY_POOL_STATS => match serde_json::from_value(arguments) {
                Ok(input) => self.query_pool_stats(input).await,
                Err(e) => invalid_arguments(name, e),
            },
            QUERY_TOP_POOLS => match serde_json::from_value(arguments) {
                Ok(input) => self.query_top_pools(input).await,
                Err(e) => invalid_arguments(name, e),
            },
            _ => unknown_tool(name),
        }
    }
}
