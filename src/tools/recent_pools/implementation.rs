use super::dto::{AnswerQuestionInput, FetchAndIndexInput};
use crate::error::{PoolAgentError, Result};
use crate::subgraph::{Pool, PoolsData, SubgraphClient};
use crate::summary::summarize_recent;
use crate::tools::{invalid_arguments, unknown_tool, Tool, ToolSet};
use crate::vector::{Document, QueryEngine};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const FETCH_AND_INDEX_DATA: &str = "fetch_and_index_data";
pub const ANSWER_QUESTION: &str = "answer_question";
pub const NO_INDEX_MESSAGE: &str = "No data available. Please fetch and index data first.";

/// Tools behind the recent-pools agent.
///
/// Holds the pools of the last successful fetch; each fetch replaces the
/// list wholesale. With a query engine attached, every fetched pool is also
/// indexed and `answer_question` searches what this instance indexed.
pub struct RecentPoolTools {
    subgraph: SubgraphClient,
    pools: RwLock<Vec<Pool>>,
    indexed: AtomicUsize,
    query_engine: Option<Arc<dyn QueryEngine>>,
}

impl RecentPoolTools {
    pub fn new(subgraph: SubgraphClient) -> Self {
        Self {
            subgraph,
            pools: RwLock::new(Vec::new()),
            indexed: AtomicUsize::new(0),
            query_engine: None,
        }
    }

    pub fn with_query_engine(mut self, engine: Arc<dyn QueryEngine>) -> Self {
        self.query_engine = Some(engine);
        self
    }

    pub async fn pools(&self) -> Vec<Pool> {
        self.pools.read().await.clone()
    }

    /// Documents written to the query engine by the last successful fetch.
    pub fn indexed_count(&self) -> usize {
        self.indexed.load(Ordering::SeqCst)
    }

    pub async fn fetch_and_index_data(&self, input: FetchAndIndexInput) -> String {
        match self.fetch_recent(&input.user_input).await {
            Ok(text) => text,
            Err(PoolAgentError::GraphqlError(errors)) => {
                tracing::error!("GraphQL errors: {}", errors);
                format!("Error fetching data: {}", errors)
            }
            Err(e) => {
                tracing::error!("Error during fetch and index: {}", e);
                format!("Error during fetch and index: {}", e)
            }
        }
    }

    async fn fetch_recent(&self, user_input: &str) -> Result<String> {
        let data: PoolsData = self.subgraph.fetch_pools(user_input).await?.into_data()?;
        tracing::info!(count = data.pools.len(), "Fetched pools");

        let summary = summarize_recent(&data.pools)?;
        let indexed = match &self.query_engine {
            Some(engine) if !data.pools.is_empty() => {
                let documents: Vec<Document> = data.pools.iter().map(pool_document).collect();
                engine.index(&documents).await?
            }
            _ => 0,
        };

        *self.pools.write().await = data.pools;
        self.indexed.store(indexed, Ordering::SeqCst);
        Ok(summary)
    }

    pub async fn answer_question(&self, input: AnswerQuestionInput) -> String {
        let engine = match &self.query_engine {
            Some(engine) if self.indexed_count() > 0 => engine,
            _ => return NO_INDEX_MESSAGE.to_string(),
        };
        match engine.query(&input.question).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("Error answering question: {}", e);
                format!("Error answering question: {}", e)
            }
        }
    }
}

/// One searchable record per pool, keyed by the pool id.
pub fn pool_document(pool: &Pool) -> Document {
    let text = format!(
        "{}/{} volume ${} id {}",
        pool.token0.symbol, pool.token1.symbol, pool.volume_usd, pool.id
    );
    Document::new(&pool.id, text)
        .with_metadata("pool_id", pool.id.as_str())
        .with_metadata("token0", pool.token0.symbol.as_str())
        .with_metadata("token1", pool.token1.symbol.as_str())
        .with_metadata("volumeUSD", pool.volume_usd.as_str())
}

#[async_trait]
impl ToolSet for RecentPoolTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: FETCH_AND_INDEX_DATA.to_string(),
                description: "Fetch Uniswap pool data and index it in the vector store".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "user_input": { "type": "string", "description": "The user's request" }
                    }
                }),
            },
            Tool {
                name: ANSWER_QUESTION.to_string(),
                description: "Answer questions about the indexed pool data".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "question": { "type": "string", "description": "Question about the pools" }
                    },
                    "required": ["question"]
                }),
            },
        ]
    }

    async fn call(&self, name: &str, arguments: Value) -> String {
        match name {
            FETCH_AND_INDEX_DATA => match serde_json::from_value(arguments) {
                Ok(input) => self.fetch_and_index_data(input).await,
                Err(e) => invalid_arguments(name, e),
            },
            ANSWER_QUESTION => match serde_json::from_value(arguments) {
                Ok(input) => self.answer_question(input).await,
                Err(e) => invalid_arguments(name, e),
            },
            _ => unknown_tool(name),
        }
    }
}
