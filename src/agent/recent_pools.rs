use super::responder::Responder;
use super::tool_agent::ToolAgent;
use crate::config::AgentConfig;
use crate::error::Result;
use crate::llm::{ChatModel, OpenAiClient};
use crate::subgraph::SubgraphClient;
use crate::tools::RecentPoolTools;
use crate::vector::{PineconeIndex, VectorQueryEngine};
use async_trait::async_trait;
use std::sync::Arc;

pub const RECENT_POOLS_PROMPT: &str = "You are an assistant for Uniswap liquidity pool data. \
Use fetch_and_index_data to load the latest pools from the subgraph and answer_question \
to look up details in the indexed data. Answer concisely.";

/// Model-driven agent over the recent-pools tools.
pub struct RecentPoolAgent {
    agent: ToolAgent<RecentPoolTools>,
}

impl RecentPoolAgent {
    pub fn new(model: Arc<dyn ChatModel>, tools: RecentPoolTools) -> Self {
        Self {
            agent: ToolAgent::new(model, tools, RECENT_POOLS_PROMPT),
        }
    }

    /// Builds every handle from configuration. Connects to the vector index
    /// when one is configured.
    pub async fn from_config(config: &AgentConfig) -> Result<Self> {
        let subgraph = SubgraphClient::new(&config.subgraph)?;
        let llm = Arc::new(OpenAiClient::new(&config.llm)?);

        let mut tools = RecentPoolTools::new(subgraph);
        if let Some(vector) = &config.vector {
            let index = PineconeIndex::connect(vector).await?;
            let engine = VectorQueryEngine::new(llm.clone(), index, vector.top_k);
            tools = tools.with_query_engine(Arc::new(engine));
        } else {
            tracing::warn!("No vector index configured; answer_question is unavailable");
        }

        Ok(Self {
            agent: ToolAgent::new(llm, tools, RECENT_POOLS_PROMPT)
                .with_max_rounds(config.llm.max_tool_rounds),
        })
    }

    pub fn tools(&self) -> &RecentPoolTools {
        self.agent.tools()
    }
}

#[async_trait]
impl Responder for RecentPoolAgent {
    async fn respond(&self, user_text: &str) -> String {
        self.agent.respond(user_text).await
    }
}
