use crate::error::{PoolAgentError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBGRAPH_URL: &str =
    "https://gateway.thegraph.com/api/subgraphs/id/HUZDsRpEVP2AvzDCyzDHtdc64dyDxx8FQjzsmqSg4H3B";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_PINECONE_CONTROL_URL: &str = "https://api.pinecone.io";

/// Configuration shared by both chat agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub subgraph: SubgraphConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub vector: Option<VectorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgraphConfig {
    #[serde(default = "default_subgraph_url")]
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    // Only needed by the model-driven dispatch strategy
    pub api_key: Option<String>,
    pub model: String,
    pub embedding_model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tool_rounds: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorConfig {
    pub api_key: String,
    pub index_name: String,
    #[serde(default = "default_pinecone_control_url")]
    pub control_url: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub upload_dir: String,
    pub file_url_prefix: String,
}

fn default_subgraph_url() -> String {
    DEFAULT_SUBGRAPH_URL.to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_pinecone_control_url() -> String {
    DEFAULT_PINECONE_CONTROL_URL.to_string()
}

fn default_top_k() -> usize {
    5
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4".to_string(),
            embedding_model: "text-embedding-ada-002".to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            temperature: 0.0,
            max_tool_rounds: 10,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            log_level: "info".to_string(),
            upload_dir: "output/uploaded".to_string(),
            file_url_prefix: "/api/files/output/uploaded".to_string(),
        }
    }
}

impl AgentConfig {
    /// Reads `POOL_AGENTS_CONFIG` if set, otherwise the process environment.
    pub fn load() -> Result<Self> {
        match std::env::var("POOL_AGENTS_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(&path),
            _ => Self::from_env(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(get("SUBGRAPH_API_KEY")).ok_or_else(|| {
            PoolAgentError::config_error("SUBGRAPH_API_KEY not found in environment variables")
        })?;

        let mut subgraph = SubgraphConfig {
            url: default_subgraph_url(),
            api_key,
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            timeout_secs: default_timeout_secs(),
        };
        if let Some(url) = non_empty(get("SUBGRAPH_URL")) {
            subgraph.url = url;
        }
        if let Some(v) = get("SUBGRAPH_MAX_RETRIES") {
            subgraph.max_retries = parse_var("SUBGRAPH_MAX_RETRIES", &v)?;
        }
        if let Some(v) = get("SUBGRAPH_INITIAL_DELAY_MS") {
            subgraph.initial_delay_ms = parse_var("SUBGRAPH_INITIAL_DELAY_MS", &v)?;
        }
        if let Some(v) = get("SUBGRAPH_TIMEOUT_SECS") {
            subgraph.timeout_secs = parse_var("SUBGRAPH_TIMEOUT_SECS", &v)?;
        }

        let mut llm = LlmConfig {
            api_key: non_empty(get("OPENAI_API_KEY")),
            ..LlmConfig::default()
        };
        if let Some(model) = non_empty(get("OPENAI_MODEL")) {
            llm.model = model;
        }
        if let Some(model) = non_empty(get("OPENAI_EMBEDDING_MODEL")) {
            llm.embedding_model = model;
        }
        if let Some(base_url) = non_empty(get("OPENAI_BASE_URL")) {
            llm.base_url = base_url;
        }

        let vector = match (
            non_empty(get("PINECONE_API_KEY")),
            non_empty(get("PINECONE_INDEX_NAME")),
        ) {
            (Some(api_key), Some(index_name)) => Some(VectorConfig {
                api_key,
                index_name,
                control_url: default_pinecone_control_url(),
                top_k: default_top_k(),
            }),
            _ => None,
        };

        let config = Self {
            subgraph,
            llm,
            vector,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PoolAgentError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: AgentConfig = toml::from_str(&content).map_err(|e| {
            PoolAgentError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.subgraph.api_key.trim().is_empty() {
            return Err(PoolAgentError::config_error("subgraph api_key must not be empty"));
        }
        if self.subgraph.max_retries == 0 {
            return Err(PoolAgentError::config_error("max_retries must be at least 1"));
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = get("POOL_AGENTS_PORT") {
            config.port = port
                .parse()
                .map_err(|_| PoolAgentError::config_error("Invalid POOL_AGENTS_PORT"))?;
        }
        if let Some(log_level) = non_empty(get("POOL_AGENTS_LOG_LEVEL")) {
            config.log_level = log_level;
        }
        if let Some(dir) = non_empty(get("POOL_AGENTS_UPLOAD_DIR")) {
            config.upload_dir = dir;
        }
        if let Some(prefix) = non_empty(get("POOL_AGENTS_FILE_URL_PREFIX")) {
            config.file_url_prefix = prefix;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PoolAgentError::config_error(format!("Invalid {}", name)))
}
