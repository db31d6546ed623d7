pub mod dto;
pub mod implementation;

pub use dto::{PoolStatsInput, TopPoolsInput, DEFAULT_TOP_POOLS_LIMIT};
pub use implementation::{PoolStatsTools, QUERY_POOL_STATS, QUERY_TOP_POOLS};
