#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use pool_agents::config::SubgraphConfig;
use pool_agents::llm::{ChatMessage, ChatModel, FunctionCall, Role, ToolCall, ToolDefinition};
use pool_agents::{PoolAgentError, Result, SubgraphClient};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
    fail_first: usize,
    reply: Value,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

/// A local stand-in for the subgraph gateway.
pub struct MockSubgraph {
    pub url: String,
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockSubgraph {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn client(&self, max_retries: u32) -> SubgraphClient {
        SubgraphClient::new(&subgraph_config(&self.url, max_retries)).unwrap()
    }
}

pub fn subgraph_config(url: &str, max_retries: u32) -> SubgraphConfig {
    SubgraphConfig {
        url: url.to_string(),
        api_key: "test-key".to_string(),
        max_retries,
        initial_delay_ms: 10,
        timeout_secs: 5,
    }
}

/// Client pointed at a closed port, for paths that must not touch the network.
pub fn offline_client() -> SubgraphClient {
    SubgraphClient::new(&subgraph_config("http://127.0.0.1:9/", 1)).unwrap()
}

async fn handle(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let n = state.hits.fetch_add(1, Ordering::SeqCst);
    state.seen.lock().unwrap().push(SeenRequest {
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    });
    if n < state.fail_first {
        return (StatusCode::INTERNAL_SERVER_ERROR, "indexer unavailable").into_response();
    }
    Json(state.reply.clone()).into_response()
}

/// Serves `reply` after answering the first `fail_first` requests with a 500.
pub async fn spawn_subgraph(fail_first: usize, reply: Value) -> MockSubgraph {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        hits: hits.clone(),
        fail_first,
        reply,
        seen: seen.clone(),
    };
    let app = Router::new().route("/", post(handle)).with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockSubgraph {
        url: format!("http://{}/", addr),
        hits,
        seen,
    }
}

pub fn pools_reply(pools: Value) -> Value {
    json!({ "data": { "pools": pools } })
}

pub fn sample_pools() -> Value {
    json!([
        { "id": "p1", "token0": { "symbol": "USDC" }, "token1": { "symbol": "ETH" }, "volumeUSD": "1234.5" },
        { "id": "p2", "token0": { "symbol": "WBTC" }, "token1": { "symbol": "ETH" }, "volumeUSD": "99.999" },
        { "id": "p3", "token0": { "symbol": "DAI" }, "token1": { "symbol": "USDC" }, "volumeUSD": "0" },
        { "id": "p4", "token0": { "symbol": "UNI" }, "token1": { "symbol": "ETH" }, "volumeUSD": "10.1" },
        { "id": "p5", "token0": { "symbol": "LINK" }, "token1": { "symbol": "ETH" }, "volumeUSD": "5" },
        { "id": "p6", "token0": { "symbol": "PEPE" }, "token1": { "symbol": "ETH" }, "volumeUSD": "7" }
    ])
}

/// Chat model that replays canned replies and records what it was sent.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<ChatMessage>>>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
    tool_names: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<ChatMessage>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
            tool_names: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.seen.lock().unwrap().clone()
    }

    pub fn offered_tools(&self) -> Vec<String> {
        self.tool_names.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<ChatMessage> {
        self.seen.lock().unwrap().push(messages.to_vec());
        *self.tool_names.lock().unwrap() = tools.iter().map(|t| t.function.name.clone()).collect();
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PoolAgentError::api_error("script exhausted")))
    }
}

pub fn tool_call_reply(id: &str, name: &str, arguments: Value) -> ChatMessage {
    ChatMessage {
        role: Role::Assistant,
        content: None,
        tool_calls: Some(vec![ToolCall {
            id: id.to_string(),
            kind: "function".to_string(),
            function: FunctionCall {
                name: name.to_string(),
                arguments: arguments.to_string(),
            },
        }]),
        tool_call_id: None,
    }
}
