use super::responder::Responder;
use crate::error::{PoolAgentError, Result};
use crate::llm::{ChatMessage, ChatModel, ToolCall, ToolDefinition};
use crate::tools::ToolSet;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 10;

/// Model-driven dispatch: the chat model decides which tools to call.
///
/// History lives as long as the agent. A failed turn is rolled back so the
/// next one starts from the last complete exchange.
pub struct ToolAgent<T> {
    model: Arc<dyn ChatModel>,
    tools: T,
    definitions: Vec<ToolDefinition>,
    history: Mutex<Vec<ChatMessage>>,
    max_rounds: usize,
}

impl<T: ToolSet> ToolAgent<T> {
    pub fn new(model: Arc<dyn ChatModel>, tools: T, system_prompt: &str) -> Self {
        let definitions = tools.tools().iter().map(ToolDefinition::from).collect();
        Self {
            model,
            tools,
            definitions,
            history: Mutex::new(vec![ChatMessage::system(system_prompt)]),
            max_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn tools(&self) -> &T {
        &self.tools
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().await.clone()
    }

    pub async fn chat(&self, user_text: &str) -> Result<String> {
        let mut history = self.history.lock().await;
        let turn_start = history.len();
        history.push(ChatMessage::user(user_text));

        let result = self.run_turn(&mut history).await;
        if result.is_err() {
            history.truncate(turn_start);
        }
        result
    }

    async fn run_turn(&self, history: &mut Vec<ChatMessage>) -> Result<String> {
        for round in 0..self.max_rounds {
            let reply = self.model.complete(history, &self.definitions).await?;
            let calls = reply.requested_tool_calls().to_vec();
            history.push(reply);

            if calls.is_empty() {
                let content = history
                    .last()
                    .and_then(|m| m.content.clone())
                    .unwrap_or_default();
                return Ok(content);
            }

            for call in calls {
                tracing::info!(tool = %call.function.name, round, "Calling tool");
                let output = self.run_tool(&call).await;
                tracing::debug!(tool = %call.function.name, "Tool output: {}", output);
                history.push(ChatMessage::tool(call.id, output));
            }
        }
        Err(PoolAgentError::api_error(format!(
            "no final answer after {} tool rounds",
            self.max_rounds
        )))
    }

    async fn run_tool(&self, call: &ToolCall) -> String {
        let name = call.function.name.as_str();
        let raw = call.function.arguments.trim();
        let arguments = if raw.is_empty() {
            Value::Object(Default::default())
        } else {
            match serde_json::from_str(raw) {
                Ok(value) => value,
                Err(e) => return format!("Invalid JSON arguments for {}: {}", name, e),
            }
        };
        self.tools.call(name, arguments).await
    }
}

#[async_trait]
impl<T: ToolSet> Responder for ToolAgent<T> {
    async fn respond(&self, user_text: &str) -> String {
        tracing::info!("Received user input: {}", user_text);
        match self.chat(user_text).await {
            Ok(reply) => {
                tracing::info!("Agent response: {}", reply);
                reply
            }
            Err(e) => {
                tracing::error!("Error in agent: {}", e);
                format!("An error occurred: {}", e)
            }
        }
    }
}
