use crate::error::{PoolAgentError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A pool as returned by the subgraph. Numeric fields stay strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: String,
    pub token0: Token,
    pub token1: Token,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<String>,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value_locked_token0: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value_locked_token1: Option<String>,
    #[serde(
        rename = "totalValueLockedUSD",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_value_locked_usd: Option<String>,
    #[serde(rename = "feesUSD", default, skip_serializing_if = "Option::is_none")]
    pub fees_usd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_block_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_timestamp: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PoolsData {
    #[serde(default)]
    pub pools: Vec<Pool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PoolData {
    #[serde(default)]
    pub pool: Option<Pool>,
}

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
}

/// Standard GraphQL envelope. A transport-level success may still carry `errors`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    pub fn error_summary(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Decodes `data` into `T`; a missing `data` decodes as an empty object.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let data = self.data.unwrap_or_else(|| Value::Object(Default::default()));
        Ok(serde_json::from_value(data)?)
    }

    /// Like [`decode`](Self::decode), but a non-empty `errors` list fails with
    /// [`PoolAgentError::GraphqlError`].
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        if let Some(errors) = self.error_summary() {
            return Err(PoolAgentError::GraphqlError(errors));
        }
        self.decode()
    }
}
