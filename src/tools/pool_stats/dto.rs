use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_POOLS_LIMIT: u32 = 5;

#[derive(Debug, Serialize, Deserialize)]
pub struct PoolStatsInput {
    pub pool_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopPoolsInput {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for TopPoolsInput {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOP_POOLS_LIMIT,
        }
    }
}

fn default_limit() -> u32 {
    DEFAULT_TOP_POOLS_LIMIT
}
