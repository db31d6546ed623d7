use super::intent::{classify, Intent};
use super::responder::Responder;
use super::tool_agent::ToolAgent;
use crate::config::AgentConfig;
use crate::error::Result;
use crate::llm::{ChatModel, OpenAiClient};
use crate::subgraph::SubgraphClient;
use crate::tools::{PoolStatsInput, PoolStatsTools, TopPoolsInput};
use async_trait::async_trait;
use std::sync::Arc;

pub const POOL_STATS_PROMPT: &str = "You are an assistant for Uniswap liquidity pool \
statistics. Use query_top_pools to list pools by volume and query_pool_stats for a \
single pool. Answer concisely.";
pub const MISSING_POOL_ID: &str = "Please provide a pool ID to get pool stats.";
pub const UNKNOWN_REQUEST: &str =
    "I'm not sure what you're asking. You can ask for 'top pools' or 'pool stats for pool id <ID>'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStrategy {
    /// Keyword classification, no model involved.
    Rules,
    /// The chat model picks the tool.
    Model,
}

/// Pool-stats agent. Rule-based by default; model-driven on request.
pub struct PoolStatsAgent {
    tools: Arc<PoolStatsTools>,
    model_agent: Option<ToolAgent<Arc<PoolStatsTools>>>,
}

impl PoolStatsAgent {
    pub fn rule_based(tools: PoolStatsTools) -> Self {
        Self {
            tools: Arc::new(tools),
            model_agent: None,
        }
    }

    pub fn model_driven(model: Arc<dyn ChatModel>, tools: PoolStatsTools) -> Self {
        let tools = Arc::new(tools);
        Self {
            model_agent: Some(ToolAgent::new(model, tools.clone(), POOL_STATS_PROMPT)),
            tools,
        }
    }

    pub fn from_config(config: &AgentConfig, strategy: DispatchStrategy) -> Result<Self> {
        let tools = PoolStatsTools::new(SubgraphClient::new(&config.subgraph)?);
        match strategy {
            DispatchStrategy::Rules => Ok(Self::rule_based(tools)),
            DispatchStrategy::Model => {
                let llm = Arc::new(OpenAiClient::new(&config.llm)?);
                let mut agent = Self::model_driven(llm, tools);
                agent.model_agent = agent
                    .model_agent
                    .map(|a| a.with_max_rounds(config.llm.max_tool_rounds));
                Ok(agent)
            }
        }
    }

    pub fn strategy(&self) -> DispatchStrategy {
        if self.model_agent.is_some() {
            DispatchStrategy::Model
        } else {
            DispatchStrategy::Rules
        }
    }

    pub fn tools(&self) -> &PoolStatsTools {
        &self.tools
    }

    pub async fn dispatch(&self, intent: Intent) -> String {
        tracing::debug!(?intent, "Dispatching classified request");
        match intent {
            Intent::TopPools { limit } => self.tools.query_top_pools(TopPoolsInput { limit }).await,
            Intent::PoolStats {
                pool_id: Some(pool_id),
            } => self.tools.query_pool_stats(PoolStatsInput { pool_id }).await,
            Intent::PoolStats { pool_id: None } => MISSING_POOL_ID.to_string(),
            Intent::Unknown => UNKNOWN_REQUEST.to_string(),
        }
    }
}

#[async_trait]
impl Responder for PoolStatsAgent {
    async fn respond(&self, user_text: &str) -> String {
        match &self.model_agent {
            Some(agent) => agent.respond(user_text).await,
            None => {
                tracing::info!("Received user input: {}", user_text);
                self.dispatch(classify(user_text)).await
            }
        }
    }
}
