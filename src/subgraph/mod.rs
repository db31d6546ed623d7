pub mod dto;
pub mod implementation;
pub mod queries;
pub mod retry;

pub use dto::{GraphqlError, GraphqlResponse, Pool, PoolData, PoolsData, Token};
pub use implementation::SubgraphClient;
pub use retry::{retry_with_backoff, RetryPolicy};
