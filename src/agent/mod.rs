pub mod intent;
pub mod pool_stats;
pub mod recent_pools;
pub mod responder;
pub mod tool_agent;

pub use intent::{classify, Intent};
pub use pool_stats::{DispatchStrategy, PoolStatsAgent};
pub use recent_pools::RecentPoolAgent;
pub use responder::Responder;
pub use tool_agent::ToolAgent;
