pub mod pool_stats;
pub mod recent_pools;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub use pool_stats::{PoolStatsInput, PoolStatsTools, TopPoolsInput};
pub use recent_pools::{AnswerQuestionInput, FetchAndIndexInput, RecentPoolTools};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// A fixed set of named functions a chat model may call.
///
/// `call` never fails: every outcome, including bad arguments and unknown
/// names, comes back as text for the model to read.
#[async_trait]
pub trait ToolSet: Send + Sync {
    fn tools(&self) -> Vec<Tool>;

    async fn call(&self, name: &str, arguments: Value) -> String;
}

#[async_trait]
impl<T: ToolSet + ?Sized> ToolSet for Arc<T> {
    fn tools(&self) -> Vec<Tool> {
        (**self).tools()
    }

    async fn call(&self, name: &str, arguments: Value) -> String {
        (**self).call(name, arguments).await
    }
}

pub(crate) fn invalid_arguments(tool: &str, err: serde_json::Error) -> String {
    format!("Invalid arguments for {}: {}", tool, err)
}

pub(crate) fn unknown_tool(name: &str) -> String {
    format!("Unknown tool: {}", name)
}
