use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoolAgentError>;

#[derive(Error, Debug)]
pub enum PoolAgentError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("GraphQL errors: {0}")]
    GraphqlError(String),

    #[error("Invalid volume for pool {pool_id}: {value}")]
    InvalidVolume { pool_id: String, value: String },

    #[error("Upload error: {0}")]
    UploadError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PoolAgentError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        PoolAgentError::ApiError(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        PoolAgentError::ConfigError(msg.into())
    }

    pub fn upload_error(msg: impl Into<String>) -> Self {
        PoolAgentError::UploadError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        PoolAgentError::Internal(msg.into())
    }
}
