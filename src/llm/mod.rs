pub mod dto;
pub mod implementation;
pub mod model;

pub use dto::{ChatMessage, FunctionCall, Role, ToolCall, ToolDefinition};
pub use implementation::OpenAiClient;
pub use model::{ChatModel, Embedder};
