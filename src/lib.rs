pub mod agent;
pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod subgraph;
pub mod summary;
pub mod tools;
pub mod upload;
pub mod vector;

pub use agent::{DispatchStrategy, PoolStatsAgent, RecentPoolAgent, Responder};
pub use config::{AgentConfig, ServerConfig};
pub use error::{PoolAgentError, Result};
pub use subgraph::SubgraphClient;
